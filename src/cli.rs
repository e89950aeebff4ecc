//! Command-line argument parsing for steps.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Turn the parsed start state into a [`StepWidget`].
//!
//! Invariants:
//! - `--start-step` only yields values the widget accepts (1..=3).

use clap::Parser;
use std::path::PathBuf;

use crate::domain::{StepIndex, StepWidget};

/// Command-line arguments for steps.
#[derive(Debug, Parser)]
#[command(
    name = "steps",
    about = "Three-step progress indicator for the terminal",
    version,
    after_help = "Examples:\n  steps\n  steps --start-step 2\n  steps --hidden --no-mouse\n  steps --start-step 3 --dump\n"
)]
pub struct Cli {
    /// Step to start on (1, 2 or 3)
    #[arg(long, default_value = "1", value_parser = parse_step)]
    pub start_step: StepIndex,

    /// Start with the steps dismissed
    #[arg(long)]
    pub hidden: bool,

    /// Directory for log files
    #[arg(long, env = "STEPS_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Print the initial view description as JSON and exit
    #[arg(long)]
    pub dump: bool,
}

impl Cli {
    pub fn initial_widget(&self) -> StepWidget {
        StepWidget::with_state(self.start_step, !self.hidden)
    }

    /// Pretty-printed JSON view description of the initial widget.
    pub fn dump_view(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.initial_widget().render())
    }
}

fn parse_step(value: &str) -> Result<StepIndex, String> {
    let step: u8 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a step number"))?;
    StepIndex::new(step).map_err(|e| e.to_string())
}
