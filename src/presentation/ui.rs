use crate::application::{App, AppMode, WidgetAction};
use crate::domain::{Marker, StepPanel, ViewDescription};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Accent colour used for active markers and the navigation buttons (#7950f2).
pub const ACCENT: Color = Color::Rgb(121, 80, 242);

const MARKER_WIDTH: u16 = 5;
const MARKER_GAP: u16 = 4;
const BUTTON_WIDTH: u16 = 12;
const DISMISS_WIDTH: u16 = 3;

/// Screen regions of the widget's controls for a given frame area.
///
/// Computed the same way for painting and for mouse hit-testing, so a click
/// lands on exactly what was drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetLayout {
    pub frame: Rect,
    pub status_bar: Rect,
    pub dismiss: Rect,
    pub markers: Option<[Rect; 3]>,
    pub message: Option<Rect>,
    pub previous: Option<Rect>,
    pub next: Option<Rect>,
}

impl WidgetLayout {
    pub fn compute(area: Rect, visible: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);
        let frame = chunks[0];
        let status_bar = chunks[1];

        let inner = Block::default().borders(Borders::ALL).inner(frame);
        let dismiss = Rect {
            x: inner.right().saturating_sub(DISMISS_WIDTH),
            y: inner.y,
            width: DISMISS_WIDTH.min(inner.width),
            height: inner.height.min(1),
        };

        if !visible {
            return Self {
                frame,
                status_bar,
                dismiss,
                markers: None,
                message: None,
                previous: None,
                next: None,
            };
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        let markers_width = MARKER_WIDTH * 3 + MARKER_GAP * 2;
        let markers_x = rows[1].x + rows[1].width.saturating_sub(markers_width) / 2;
        let markers = [0u16, 1, 2].map(|i| {
            Rect {
                x: markers_x + i * (MARKER_WIDTH + MARKER_GAP),
                y: rows[1].y,
                width: MARKER_WIDTH,
                height: rows[1].height,
            }
            .intersection(inner)
        });

        let buttons = rows[5];
        let previous = Rect {
            x: buttons.x + 1,
            width: BUTTON_WIDTH,
            ..buttons
        }
        .intersection(inner);
        let next = Rect {
            x: buttons.right().saturating_sub(BUTTON_WIDTH + 1),
            width: BUTTON_WIDTH,
            ..buttons
        }
        .intersection(inner);

        Self {
            frame,
            status_bar,
            dismiss,
            markers: Some(markers),
            message: Some(rows[3]),
            previous: Some(previous),
            next: Some(next),
        }
    }

    /// Maps a screen cell to the control under it.
    pub fn hit(&self, column: u16, row: u16) -> Option<WidgetAction> {
        let position = Position::new(column, row);
        let inside = |rect: Option<Rect>| rect.is_some_and(|r| r.contains(position));

        if self.dismiss.contains(position) {
            Some(WidgetAction::ToggleVisibility)
        } else if inside(self.previous) {
            Some(WidgetAction::Previous)
        } else if inside(self.next) {
            Some(WidgetAction::Next)
        } else {
            None
        }
    }
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let view = app.view();
    let layout = WidgetLayout::compute(f.area(), view.is_panel_visible());

    render_widget(f, &view, &layout);
    render_status_bar(f, app, layout.status_bar);

    if matches!(app.mode, AppMode::Help) {
        render_help_popup(f);
    }
}

fn render_widget(f: &mut Frame, view: &ViewDescription, layout: &WidgetLayout) {
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title("Steps")
            .border_style(Style::default().fg(Color::DarkGray)),
        layout.frame,
    );

    let dismiss = Paragraph::new(view.dismiss.label)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(dismiss, layout.dismiss);

    if let Some(panel) = &view.panel {
        render_panel(f, panel, layout);
    }
}

fn render_panel(f: &mut Frame, panel: &StepPanel, layout: &WidgetLayout) {
    if let Some(areas) = layout.markers {
        for (marker, area) in panel.markers.iter().zip(areas) {
            f.render_widget(marker_widget(marker), area);
        }
    }

    if let Some(area) = layout.message {
        let message = Paragraph::new(panel.message_line.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(message, area);
    }

    if let Some(area) = layout.previous {
        f.render_widget(button_widget("Previous", panel.previous_enabled), area);
    }
    if let Some(area) = layout.next {
        f.render_widget(button_widget("Next", panel.next_enabled), area);
    }
}

fn marker_widget(marker: &Marker) -> Paragraph<'static> {
    let (style, border) = if marker.active {
        (
            Style::default().bg(ACCENT).fg(Color::White).add_modifier(Modifier::BOLD),
            Style::default().fg(ACCENT),
        )
    } else {
        (Style::default().fg(Color::Gray), Style::default().fg(Color::DarkGray))
    };

    Paragraph::new(marker.number.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(border))
}

fn button_widget(label: &'static str, enabled: bool) -> Paragraph<'static> {
    let mut style = Style::default().bg(ACCENT).fg(Color::White);
    if !enabled {
        style = style.add_modifier(Modifier::DIM);
    }

    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL))
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => app.status_message.clone().unwrap_or_else(|| {
            "←/p: previous | →/n: next | x: dismiss | ?: help | q: quit".to_string()
        }),
        AppMode::Help => "Esc/?/q: close help".to_string(),
    };

    let style = match app.mode {
        AppMode::Normal => Style::default().fg(Color::DarkGray),
        AppMode::Help => Style::default().fg(Color::Cyan),
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

/// Centred rectangle covering four fifths of `area` in each direction.
fn popup_area(area: Rect) -> Rect {
    // Widen before multiplying; the result never exceeds the input.
    let scale = |len: u16, num: u32| (u32::from(len) * num / 10) as u16;
    Rect {
        x: area.x + scale(area.width, 1),
        y: area.y + scale(area.height, 1),
        width: scale(area.width, 8),
        height: scale(area.height, 8),
    }
}

fn render_help_popup(f: &mut Frame) {
    let popup_area = popup_area(f.area());

    f.render_widget(Clear, popup_area);

    let help = Paragraph::new(HELP_TEXT)
        .block(Block::default()
            .borders(Borders::ALL)
            .title("Help")
            .style(Style::default().fg(Color::Cyan)))
        .style(Style::default().fg(Color::White));

    f.render_widget(help, popup_area);
}

const HELP_TEXT: &str = "\
=== NAVIGATION ===
← / h / p       Previous step (stays on step 1)
→ / l / n       Next step (stays on step 3)

=== PANEL ===
x / Esc / Space Dismiss or reopen the steps
Mouse click     Previous, Next and the × control

=== OTHER ===
? / F1          Toggle this help
q / Ctrl+C      Quit";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StepIndex, StepWidget};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|c| c.symbol()).collect::<String>()
    }

    fn area() -> Rect {
        Rect::new(0, 0, 60, 20)
    }

    #[test]
    fn test_render_initial_view() {
        let content = draw(&App::default(), 60, 20);

        assert!(content.contains("Steps"));
        assert!(content.contains("Step 1: Learn React"));
        assert!(content.contains("Previous"));
        assert!(content.contains("Next"));
        assert!(content.contains('×'));
        assert!(content.contains('1') && content.contains('2') && content.contains('3'));
    }

    #[test]
    fn test_render_hidden_panel_keeps_dismiss_control() {
        let app = App::new(StepWidget::with_state(StepIndex::FIRST, false));
        let content = draw(&app, 60, 20);

        assert!(!content.contains("Learn React"));
        assert!(!content.contains("Previous"));
        assert!(content.contains('☰'));
    }

    #[test]
    fn test_render_help_popup() {
        let mut app = App::default();
        app.toggle_help();
        let content = draw(&app, 60, 20);

        assert!(content.contains("Help"));
        assert!(content.contains("NAVIGATION"));
    }

    #[test]
    fn test_render_status_message() {
        let mut app = App::default();
        app.status_message = Some("Already at step 1".to_string());
        let content = draw(&app, 60, 20);

        assert!(content.contains("Already at step 1"));
    }

    #[test]
    fn test_active_marker_uses_accent() {
        let app = App::new(StepWidget::with_state(StepIndex::new(2).unwrap(), true));
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();

        let layout = WidgetLayout::compute(area(), true);
        let markers = layout.markers.unwrap();
        let buffer = terminal.backend().buffer();
        let centre = |r: Rect| (r.x + r.width / 2, r.y + 1);

        let (x, y) = centre(markers[1]);
        assert_eq!(buffer[(x, y)].bg, ACCENT);
        let (x, y) = centre(markers[2]);
        assert_ne!(buffer[(x, y)].bg, ACCENT);
    }

    #[test]
    fn test_popup_area_on_wide_terminal() {
        let wide = Rect::new(0, 0, u16::MAX, 100);
        let popup = popup_area(wide);

        assert_eq!(popup.x, 6553);
        assert_eq!(popup.width, 52428);
        assert_eq!(popup.y, 10);
        assert_eq!(popup.height, 80);
        assert!(popup.right() <= wide.right());
    }

    #[test]
    fn test_layout_hidden_has_only_dismiss() {
        let layout = WidgetLayout::compute(area(), false);

        assert!(layout.markers.is_none());
        assert!(layout.message.is_none());
        assert!(layout.previous.is_none());
        assert!(layout.next.is_none());
        assert_eq!(layout.dismiss.width, 3);
    }

    #[test]
    fn test_layout_hit_regions() {
        let layout = WidgetLayout::compute(area(), true);
        let previous = layout.previous.unwrap();
        let next = layout.next.unwrap();

        assert_eq!(layout.hit(previous.x, previous.y), Some(WidgetAction::Previous));
        assert_eq!(layout.hit(next.x + 1, next.y + 1), Some(WidgetAction::Next));
        assert_eq!(
            layout.hit(layout.dismiss.x, layout.dismiss.y),
            Some(WidgetAction::ToggleVisibility)
        );
        assert_eq!(layout.hit(0, 0), None);
        assert!(previous.right() <= next.x);
    }

    #[test]
    fn test_layout_hidden_ignores_button_clicks() {
        let visible = WidgetLayout::compute(area(), true);
        let hidden = WidgetLayout::compute(area(), false);
        let previous = visible.previous.unwrap();

        assert_eq!(hidden.hit(previous.x, previous.y), None);
        assert_eq!(
            hidden.hit(hidden.dismiss.x, hidden.dismiss.y),
            Some(WidgetAction::ToggleVisibility)
        );
    }

    #[test]
    fn test_layout_survives_tiny_area() {
        let layout = WidgetLayout::compute(Rect::new(0, 0, 4, 3), true);

        for rect in layout.markers.unwrap() {
            assert!(rect.is_empty());
        }
        assert_eq!(layout.hit(0, 0), None);
    }
}
