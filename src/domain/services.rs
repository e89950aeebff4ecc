//! The step indicator state machine and its view description.
//!
//! The widget owns two pieces of memory: the current step and whether the
//! step panel is shown. Mutators report whether anything changed so the host
//! knows when to repaint; [`StepWidget::render`] is a pure function of the
//! current state.

use super::models::{DismissControl, Marker, StepIndex, StepPanel, ViewDescription};

/// A three-step indicator with Previous/Next navigation and a dismiss toggle.
///
/// Navigation saturates at both ends: going back from step 1 or forward from
/// step 3 leaves the step unchanged.
///
/// # Examples
///
/// ```
/// use steps::domain::StepWidget;
///
/// let mut widget = StepWidget::new();
/// assert!(widget.go_next());
/// assert!(widget.go_next());
/// assert!(!widget.go_next());
/// assert_eq!(widget.step().get(), 3);
///
/// let view = widget.render();
/// assert!(view.panel.unwrap().markers.iter().all(|m| m.active));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepWidget {
    step: StepIndex,
    visible: bool,
}

impl Default for StepWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl StepWidget {
    /// Creates a widget at step 1 with the panel shown.
    pub fn new() -> Self {
        Self::with_state(StepIndex::FIRST, true)
    }

    pub fn with_state(step: StepIndex, visible: bool) -> Self {
        Self { step, visible }
    }

    pub fn step(&self) -> StepIndex {
        self.step
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Moves one step back. Returns `false` when already at the first step.
    pub fn go_previous(&mut self) -> bool {
        match self.step.previous() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Moves one step forward. Returns `false` when already at the last step.
    pub fn go_next(&mut self) -> bool {
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Shows or hides the step panel. Always reports a change.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        true
    }

    /// Builds the view description for the current state.
    ///
    /// Marker `n` is active iff `n <= step`. The dismiss control is always
    /// present; the panel only while visible.
    pub fn render(&self) -> ViewDescription {
        let dismiss = DismissControl {
            label: if self.visible {
                DismissControl::CLOSE_LABEL
            } else {
                DismissControl::OPEN_LABEL
            },
        };

        let panel = self.visible.then(|| {
            let current = self.step.get();
            StepPanel {
                markers: [1, 2, 3].map(|number| Marker {
                    number,
                    active: current >= number,
                }),
                step: self.step,
                message: self.step.message(),
                message_line: format!("Step {}: {}", current, self.step.message()),
                previous_enabled: self.step.previous().is_some(),
                next_enabled: self.step.next().is_some(),
            }
        });

        ViewDescription { dismiss, panel }
    }
}
