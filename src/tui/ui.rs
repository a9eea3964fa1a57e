use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{RowTable, TitleBar, Toolbar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const TIP: &str =
    "Tip: after reordering, send the new row order to your backend to persist it. q quits.";

/// Splits the frame into title, toolbar, table and tip areas.
pub fn layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(1), Min(0), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, toolbar_area, table_area, tip_area] = layout(frame.area());

    TitleBar::new(
        &app.title,
        app.rows().len(),
        &app.status_message,
        app.drag.effect(),
    )
    .render(frame, title_area);

    Toolbar::new(&mut tui.toolbar).render(frame, toolbar_area);

    RowTable::new(app.rows(), &app.drag, &app.title, &mut tui.row_table).render(frame, table_area);

    frame.render_widget(
        Span::styled(TIP, Style::default().fg(Color::DarkGray)),
        tip_area,
    );
}
