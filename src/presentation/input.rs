use crate::application::{App, AppMode, WidgetAction};
use crate::presentation::WidgetLayout;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.request_quit();
            return;
        }

        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    /// Handles a mouse event against the layout of the given frame area.
    ///
    /// Only left-button presses count as clicks.
    pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, area: Rect) {
        if !matches!(app.mode, AppMode::Normal) {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = WidgetLayout::compute(area, app.widget.is_visible());
        if let Some(action) = layout.hit(mouse.column, mouse.row) {
            app.apply(action);
        }
    }

    /// Maps a normal-mode key to the widget action it triggers.
    pub fn widget_action(key: KeyCode) -> Option<WidgetAction> {
        match key {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Some(WidgetAction::Previous),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Some(WidgetAction::Next),
            KeyCode::Char('x') | KeyCode::Char(' ') | KeyCode::Esc => {
                Some(WidgetAction::ToggleVisibility)
            }
            _ => None,
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        if let Some(action) = Self::widget_action(key) {
            app.apply(action);
            return;
        }

        match key {
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.status_message = None;
                app.toggle_help();
            }
            KeyCode::Char('q') => app.request_quit(),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.toggle_help();
            }
            _ => {}
        }
    }
}
