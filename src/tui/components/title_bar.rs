//! # TitleBar Component
//!
//! Top status bar: table title, row count, status message, and the drop
//! effect while a drag is in progress.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(&app.title, app.rows().len(), &app.status_message, app.drag.effect());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Dragging**: `"Team (4 rows) | Dragging row 2 (move) | ↕ move"`
//! 2. **Status message**: `"Team (4 rows) | Added New User 5"`
//! 3. **Default**: `"Team (4 rows)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::drag::DropEffect;
use crate::tui::component::Component;

/// Top status bar component.
pub struct TitleBar<'a> {
    pub title: &'a str,
    pub row_count: usize,
    pub status_message: &'a str,
    /// Set while a drag is active
    pub drag_effect: Option<DropEffect>,
}

impl<'a> TitleBar<'a> {
    pub fn new(
        title: &'a str,
        row_count: usize,
        status_message: &'a str,
        drag_effect: Option<DropEffect>,
    ) -> Self {
        Self {
            title,
            row_count,
            status_message,
            drag_effect,
        }
    }

    /// The plain-text content of the bar.
    pub fn text(&self) -> String {
        let noun = if self.row_count == 1 { "row" } else { "rows" };
        let mut text = format!("{} ({} {})", self.title, self.row_count, noun);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(self.status_message);
        }
        if let Some(effect) = self.drag_effect {
            text.push_str(" | ↕ ");
            text.push_str(effect.label());
        }
        text
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.drag_effect.is_some() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(Line::from(Span::styled(self.text(), style)), area);
    }
}
