//! # Toolbar Component
//!
//! The "Add Row" and "Print Table" buttons. Clicking a button emits the
//! same action as its keyboard shortcut.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ToolbarState` lives in `TuiState` and remembers where each button was drawn
//! - `Toolbar` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, HitTest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarButton {
    AddRow,
    Print,
}

impl ToolbarButton {
    pub const ALL: [ToolbarButton; 2] = [ToolbarButton::AddRow, ToolbarButton::Print];

    fn label(self) -> &'static str {
        match self {
            ToolbarButton::AddRow => " Add Row (a) ",
            ToolbarButton::Print => " Print Table (p) ",
        }
    }

    fn style(self) -> Style {
        let bg = match self {
            ToolbarButton::AddRow => Color::Blue,
            ToolbarButton::Print => Color::Green,
        };
        Style::default()
            .fg(Color::White)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }
}

const BUTTON_GAP: u16 = 2;

#[derive(Debug, Default)]
pub struct ToolbarState {
    buttons: Vec<(ToolbarButton, Rect)>,
}

impl ToolbarState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HitTest for ToolbarState {
    type Target = ToolbarButton;

    fn hit_test(&self, column: u16, row: u16) -> Option<ToolbarButton> {
        let pos = ratatui::layout::Position::new(column, row);
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(button, _)| *button)
    }
}

pub struct Toolbar<'a> {
    state: &'a mut ToolbarState,
}

impl<'a> Toolbar<'a> {
    pub fn new(state: &'a mut ToolbarState) -> Self {
        Self { state }
    }
}

impl Component for Toolbar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.buttons.clear();
        let mut spans = Vec::new();
        let mut x = area.x;

        for (i, button) in ToolbarButton::ALL.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
                x = x.saturating_add(BUTTON_GAP);
            }
            let label = button.label();
            let width = (label.width() as u16).min(area.right().saturating_sub(x));
            if width > 0 {
                self.state
                    .buttons
                    .push((button, Rect::new(x, area.y, width, area.height.min(1))));
            }
            spans.push(Span::styled(label, button.style()));
            x = x.saturating_add(label.width() as u16);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(width: u16, state: &mut ToolbarState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(width, 3)).unwrap();
        terminal
            .draw(|f| {
                let area = Rect::new(0, 1, width, 1);
                Toolbar::new(state).render(f, area);
            })
            .unwrap();
        terminal
    }

    #[test]
    fn test_buttons_hit_where_drawn() {
        let mut state = ToolbarState::new();
        render(60, &mut state);

        // " Add Row (a) " is 13 wide, then a 2 column gap
        assert_eq!(state.hit_test(0, 1), Some(ToolbarButton::AddRow));
        assert_eq!(state.hit_test(12, 1), Some(ToolbarButton::AddRow));
        assert_eq!(state.hit_test(13, 1), None);
        assert_eq!(state.hit_test(15, 1), Some(ToolbarButton::Print));
        assert_eq!(state.hit_test(15, 0), None);
        assert_eq!(state.hit_test(59, 1), None);
    }

    #[test]
    fn test_narrow_terminal_clips_buttons() {
        let mut state = ToolbarState::new();
        render(10, &mut state);
        assert_eq!(state.hit_test(9, 1), Some(ToolbarButton::AddRow));
        assert_eq!(state.hit_test(15, 1), None);
    }

    #[test]
    fn test_button_labels_render() {
        let mut state = ToolbarState::new();
        let terminal = render(60, &mut state);
        let buffer = terminal.backend().buffer();
        let text: String = (0..60).map(|x| buffer[(x, 1)].symbol()).collect();
        assert!(text.contains("Add Row (a)"));
        assert!(text.contains("Print Table (p)"));
    }
}
