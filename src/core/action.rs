//! # Actions
//!
//! Everything that can happen to the table becomes an `Action`.
//! User presses on a row? That's `Action::BeginDrag(index)`.
//! Clicks "Add Row"? That's `Action::AddRow`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing anything the adapter must do next. No I/O here;
//! printing happens in the TUI because only it holds the rendered markup.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Handlers for one gesture arrive in order:
//! `BeginDrag → DragOver* → Drop? → EndDrag`.

use log::{debug, info};

use crate::core::rows::ReorderOutcome;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    BeginDrag(usize),
    DragOver(usize),
    Drop,
    EndDrag,
    AddRow,
    Print,
    Quit,
}

/// Follow-up work the adapter performs after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The row order or count changed. The new sequence is on `app.store`.
    RowsChanged,
    /// Snapshot the rendered table and send it to a print surface.
    Print,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::BeginDrag(index) => {
            let effect = app.drag.begin(index);
            app.status_message = format!("Dragging row {} ({})", index + 1, effect.label());
            Effect::None
        }
        Action::DragOver(index) => {
            app.drag.hover(index);
            Effect::None
        }
        Action::Drop => {
            let target = app.drag.target();
            app.drag.end();
            let Some((from, to)) = target else {
                debug!("Drop without a complete drag session, ignoring");
                return Effect::None;
            };
            match app.store.reorder(Some(from), Some(to)) {
                ReorderOutcome::Moved => {
                    info!("Reordered row {} -> {}", from, to);
                    app.status_message = format!("Moved row {} to position {}", from + 1, to + 1);
                    Effect::RowsChanged
                }
                ReorderOutcome::Unchanged | ReorderOutcome::Rejected => Effect::None,
            }
        }
        Action::EndDrag => {
            if app.drag.is_active() {
                app.status_message = String::from("Drag a row to reorder it.");
            }
            app.drag.end();
            Effect::None
        }
        Action::AddRow => {
            let row = app.store.append_row();
            info!("Added row id={}", row.id);
            app.status_message = format!("Added {}", row.name);
            Effect::RowsChanged
        }
        Action::Print => Effect::Print,
        Action::Quit => Effect::Quit,
    }
}
