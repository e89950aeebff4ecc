//! Application state for the terminal host.
//!
//! This module wraps the step widget with the little bit of state the
//! terminal host needs: the current mode, a redraw flag and a status line.

use crate::domain::{StepWidget, ViewDescription};

/// Represents the current mode of the application.
///
/// The mode determines how key presses are interpreted and whether the
/// help popup is drawn over the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Widget is interactive - navigation and dismiss keys are active
    Normal,
    /// Help screen is displayed
    Help,
}

/// An interaction delivered to the widget.
///
/// Each variant maps 1:1 to one of the widget's mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    Previous,
    Next,
    ToggleVisibility,
}

/// Main application state containing the widget and host UI state.
///
/// # Examples
///
/// ```
/// use steps::application::{App, WidgetAction};
///
/// let mut app = App::default();
/// assert!(app.apply(WidgetAction::Next));
/// assert_eq!(app.widget.step().get(), 2);
/// ```
#[derive(Debug)]
pub struct App {
    /// The step indicator being hosted
    pub widget: StepWidget,
    /// Current application mode
    pub mode: AppMode,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Whether the next loop iteration must repaint
    pub needs_redraw: bool,
    /// Set when the user asks to leave
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(StepWidget::new())
    }
}

impl App {
    pub fn new(widget: StepWidget) -> Self {
        Self {
            widget,
            mode: AppMode::Normal,
            status_message: None,
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Applies an action to the widget.
    ///
    /// Returns `true` when the widget state changed. A saturated move leaves
    /// the widget untouched but still updates the status line, so the host
    /// repaints in both cases.
    pub fn apply(&mut self, action: WidgetAction) -> bool {
        let before = self.widget.step();
        let changed = match action {
            WidgetAction::Previous => self.widget.go_previous(),
            WidgetAction::Next => self.widget.go_next(),
            WidgetAction::ToggleVisibility => self.widget.toggle_visibility(),
        };

        self.status_message = Some(match (action, changed) {
            (WidgetAction::Previous | WidgetAction::Next, true) => {
                format!("Step {} -> {}", before, self.widget.step())
            }
            (WidgetAction::Previous | WidgetAction::Next, false) => {
                format!("Already at step {}", before)
            }
            (WidgetAction::ToggleVisibility, _) if self.widget.is_visible() => {
                "Steps shown".to_string()
            }
            (WidgetAction::ToggleVisibility, _) => "Steps dismissed".to_string(),
        });

        if changed {
            tracing::debug!(
                ?action,
                step = self.widget.step().get(),
                visible = self.widget.is_visible(),
                "widget state changed"
            );
        } else {
            tracing::trace!(?action, step = before.get(), "navigation clamped");
        }

        self.needs_redraw = true;
        changed
    }

    /// Current view description of the hosted widget.
    pub fn view(&self) -> ViewDescription {
        self.widget.render()
    }

    /// Opens the help popup, or closes it when already open.
    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Normal => AppMode::Help,
            AppMode::Help => AppMode::Normal,
        };
        self.needs_redraw = true;
    }

    pub fn request_quit(&mut self) {
        tracing::info!(step = self.widget.step().get(), "quit requested");
        self.should_quit = true;
    }

    /// Returns whether a repaint is due and clears the flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StepIndex;

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.widget.step(), StepIndex::FIRST);
        assert!(app.widget.is_visible());
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.status_message.is_none());
        assert!(app.needs_redraw);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_apply_next_changes_step() {
        let mut app = App::default();
        app.take_redraw();

        assert!(app.apply(WidgetAction::Next));
        assert_eq!(app.widget.step().get(), 2);
        assert_eq!(app.status_message.as_deref(), Some("Step 1 -> 2"));
        assert!(app.take_redraw());
        assert!(!app.take_redraw());
    }

    #[test]
    fn test_apply_previous_at_first_step_is_noop() {
        let mut app = App::default();

        assert!(!app.apply(WidgetAction::Previous));
        assert_eq!(app.widget.step().get(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Already at step 1"));
    }

    #[test]
    fn test_apply_next_at_last_step_is_noop() {
        let mut app = App::new(StepWidget::with_state(StepIndex::LAST, true));

        assert!(!app.apply(WidgetAction::Next));
        assert_eq!(app.widget.step().get(), 3);
        assert_eq!(app.status_message.as_deref(), Some("Already at step 3"));
    }

    #[test]
    fn test_apply_toggle_visibility() {
        let mut app = App::default();

        assert!(app.apply(WidgetAction::ToggleVisibility));
        assert!(!app.view().is_panel_visible());
        assert_eq!(app.status_message.as_deref(), Some("Steps dismissed"));

        assert!(app.apply(WidgetAction::ToggleVisibility));
        assert!(app.view().is_panel_visible());
        assert_eq!(app.status_message.as_deref(), Some("Steps shown"));
    }

    #[test]
    fn test_toggle_help() {
        let mut app = App::default();
        app.toggle_help();
        assert_eq!(app.mode, AppMode::Help);
        app.toggle_help();
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_request_quit() {
        let mut app = App::default();
        app.request_quit();
        assert!(app.should_quit);
    }
}
