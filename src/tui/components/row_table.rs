//! # RowTable Component
//!
//! The draggable table: one line per row, columns Name / Email / Role.
//!
//! ## Architecture
//!
//! `RowTable` is a transient component (created each frame) that wraps
//! `&'a mut RowTableState` (persistent state) and borrows the rows and the
//! drag session as props.
//!
//! Every row is both a drag source and a drop target. The render pass
//! records the geometry it used so mouse events that arrive before the next
//! frame can be mapped back to row indices, and serializes the drawn cells
//! to markup for printing.

use ratatui::Frame;
use ratatui::layout::{Constraint, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Cell, Row as TableRow, Table, TableState};
use unicode_width::UnicodeWidthStr;

use crate::core::drag::DragSession;
use crate::core::rows::Row;
use crate::tui::component::{Component, HitTest};
use crate::tui::markup;

pub const HEADERS: [&str; 3] = ["Name", "Email", "Role"];
/// Lines above the first data row inside the border.
const HEADER_HEIGHT: u16 = 1;
const COLUMN_SPACING: u16 = 2;

/// Scroll and hit-test state for the table.
/// Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct RowTableState {
    pub table_state: TableState,
    /// Row under the pointer when no drag is active
    pub hovered: Option<usize>,
    /// HTML of the table exactly as last drawn (empty before first render)
    pub rendered_markup: String,
    /// Outer area of the last render
    area: Rect,
    /// Number of rows in the last render
    row_count: usize,
}

impl RowTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.table_state.offset()
    }

    /// Data rows that fit in the last rendered area.
    pub fn visible_rows(&self) -> usize {
        self.area
            .inner(Margin::new(1, 1))
            .height
            .saturating_sub(HEADER_HEIGHT) as usize
    }

    pub fn scroll_up(&mut self) {
        let offset = self.table_state.offset_mut();
        *offset = offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = self.row_count.saturating_sub(self.visible_rows());
        let offset = self.table_state.offset_mut();
        *offset = (*offset + 1).min(max);
    }
}

impl HitTest for RowTableState {
    type Target = usize;

    /// Row index under the given screen cell, if any.
    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.area.inner(Margin::new(1, 1));
        let first_row_y = inner.y + HEADER_HEIGHT;
        if column < inner.x || column >= inner.right() || row < first_row_y || row >= inner.bottom() {
            return None;
        }
        let index = (row - first_row_y) as usize + self.offset();
        (index < self.row_count).then_some(index)
    }
}

/// Transient render wrapper for the row table.
pub struct RowTable<'a> {
    pub rows: &'a [Row],
    pub drag: &'a DragSession,
    pub title: &'a str,
    pub state: &'a mut RowTableState,
}

impl<'a> RowTable<'a> {
    pub fn new(rows: &'a [Row], drag: &'a DragSession, title: &'a str, state: &'a mut RowTableState) -> Self {
        Self {
            rows,
            drag,
            title,
            state,
        }
    }

    fn row_style(&self, index: usize) -> Style {
        if self.drag.is_dragging(index) {
            Style::default()
                .fg(Color::Gray)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else if self.drag.is_hover_target(index) {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else if !self.drag.is_active() && self.state.hovered == Some(index) {
            Style::default().bg(Color::Rgb(40, 40, 40))
        } else {
            Style::default()
        }
    }
}

/// The three display cells of a row. Missing optional fields render empty.
pub fn row_cells(row: &Row) -> Vec<String> {
    vec![
        row.name.clone(),
        row.email.clone().unwrap_or_default(),
        row.role.clone().unwrap_or_default(),
    ]
}

fn column_width(index: usize, cells: &[Vec<String>]) -> u16 {
    cells
        .iter()
        .map(|c| c[index].width())
        .chain(std::iter::once(HEADERS[index].width()))
        .max()
        .unwrap_or(0) as u16
}

impl Component for RowTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cells: Vec<Vec<String>> = self.rows.iter().map(row_cells).collect();

        let header = TableRow::new(HEADERS.iter().map(|h| Cell::from(*h)))
            .style(Style::default().add_modifier(Modifier::BOLD));

        let body: Vec<TableRow> = cells
            .iter()
            .enumerate()
            .map(|(i, c)| {
                TableRow::new(c.iter().map(|s| Cell::from(s.as_str()))).style(self.row_style(i))
            })
            .collect();

        let widths = [
            Constraint::Length(column_width(0, &cells)),
            Constraint::Length(column_width(1, &cells)),
            Constraint::Fill(1),
        ];

        let table = Table::new(body, widths)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .block(
                Block::bordered()
                    .title(format!(" {} ", self.title))
                    .border_style(Style::default().fg(Color::DarkGray)),
            );

        frame.render_stateful_widget(table, area, &mut self.state.table_state);

        self.state.area = area;
        self.state.row_count = self.rows.len();
        self.state.rendered_markup = markup::table(&HEADERS, &cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rows::default_rows;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(rows: &[Row], drag: &DragSession, state: &mut RowTableState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                RowTable::new(rows, drag, "People", state).render(f, area);
            })
            .unwrap();
        terminal
    }

    fn line(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_renders_header_and_rows_in_order() {
        let rows = default_rows();
        let mut state = RowTableState::new();
        let terminal = render(&rows, &DragSession::new(), &mut state);

        assert!(line(&terminal, 0).contains("People"));
        assert!(line(&terminal, 1).contains("Name"));
        assert!(line(&terminal, 2).contains("Alice"));
        assert!(line(&terminal, 2).contains("alice@example.com"));
        assert!(line(&terminal, 5).contains("Dave"));
    }

    #[test]
    fn test_hit_test_maps_screen_rows() {
        let rows = default_rows();
        let mut state = RowTableState::new();
        render(&rows, &DragSession::new(), &mut state);

        assert_eq!(state.hit_test(5, 1), None); // header
        assert_eq!(state.hit_test(5, 2), Some(0));
        assert_eq!(state.hit_test(5, 5), Some(3));
        assert_eq!(state.hit_test(5, 6), None); // below last row
        assert_eq!(state.hit_test(0, 2), None); // left border
    }

    #[test]
    fn test_hit_test_before_first_render() {
        assert_eq!(RowTableState::new().hit_test(5, 2), None);
    }

    #[test]
    fn test_dragged_row_is_dimmed_and_target_highlighted() {
        let rows = default_rows();
        let mut drag = DragSession::new();
        drag.begin(0);
        drag.hover(2);
        let mut state = RowTableState::new();
        let terminal = render(&rows, &drag, &mut state);

        let buffer = terminal.backend().buffer();
        assert!(buffer[(2, 2)].modifier.contains(Modifier::DIM));
        assert_eq!(buffer[(2, 4)].bg, Color::Blue);
        assert!(!buffer[(2, 3)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_render_captures_markup_of_drawn_rows() {
        let mut rows = default_rows();
        rows.swap(0, 1);
        let mut state = RowTableState::new();
        render(&rows, &DragSession::new(), &mut state);

        let markup = &state.rendered_markup;
        assert!(markup.starts_with("<table><thead><tr><th>Name</th>"));
        let bob = markup.find("<td>Bob</td>").unwrap();
        let alice = markup.find("<td>Alice</td>").unwrap();
        assert!(bob < alice);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let rows: Vec<Row> = (0..20)
            .map(|i| Row::new(i.to_string(), format!("User {i}")))
            .collect();
        let mut state = RowTableState::new();
        render(&rows, &DragSession::new(), &mut state);
        // 10 lines - 2 border - 1 header = 7 visible rows
        assert_eq!(state.visible_rows(), 7);

        for _ in 0..50 {
            state.scroll_down();
        }
        assert_eq!(state.offset(), 13);
        assert_eq!(state.hit_test(5, 2), Some(13));

        state.scroll_up();
        assert_eq!(state.offset(), 12);
    }

    #[test]
    fn test_missing_optional_fields_render_empty() {
        assert_eq!(row_cells(&Row::new("9", "Zed")), vec!["Zed", "", ""]);
    }
}
