//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the table,
//! and translates mouse and keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Gesture Mapping
//!
//! ```text
//! left press on row i        → BeginDrag(i)
//! left drag over row j       → DragOver(j)
//! left release over row j    → DragOver(j), Drop, EndDrag
//! left release elsewhere     → EndDrag            (cancelled)
//! Esc during a drag          → EndDrag            (cancelled)
//! click Add Row / key a      → AddRow
//! click Print Table / key p  → Print
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after events. All pending events are drained before the
//! next draw so a fast drag doesn't queue up stale frames.

mod component;
pub mod components;
pub mod event;
pub mod markup;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::print::{FileHost, PrintHost, PrintOutcome, print_markup};
use crate::core::state::App;
use crate::tui::component::HitTest;
use crate::tui::components::{RowTableState, ToolbarButton, ToolbarState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core table logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub row_table: RowTableState,
    pub toolbar: ToolbarState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Translate a TUI event into the core actions it stands for.
///
/// TUI-local events (scroll, pointer hover, resize) are applied to `tui`
/// directly and produce no actions.
pub fn actions_for(event: TuiEvent, app: &App, tui: &mut TuiState) -> Vec<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => vec![Action::Quit],
        TuiEvent::AddRow => vec![Action::AddRow],
        TuiEvent::Print => vec![Action::Print],
        TuiEvent::Escape if app.drag.is_active() => vec![Action::EndDrag],
        TuiEvent::Escape => vec![Action::Quit],
        TuiEvent::MouseDown(col, row) => {
            if let Some(button) = tui.toolbar.hit_test(col, row) {
                return match button {
                    ToolbarButton::AddRow => vec![Action::AddRow],
                    ToolbarButton::Print => vec![Action::Print],
                };
            }
            match tui.row_table.hit_test(col, row) {
                Some(index) => {
                    tui.row_table.hovered = None;
                    vec![Action::BeginDrag(index)]
                }
                None => Vec::new(),
            }
        }
        TuiEvent::MouseDrag(col, row) => match tui.row_table.hit_test(col, row) {
            Some(index) if app.drag.is_active() => vec![Action::DragOver(index)],
            _ => Vec::new(),
        },
        TuiEvent::MouseUp(col, row) => {
            if !app.drag.is_active() {
                return Vec::new();
            }
            match tui.row_table.hit_test(col, row) {
                Some(index) => vec![Action::DragOver(index), Action::Drop, Action::EndDrag],
                None => vec![Action::EndDrag],
            }
        }
        TuiEvent::MouseMove(col, row) => {
            tui.row_table.hovered = tui.row_table.hit_test(col, row);
            Vec::new()
        }
        TuiEvent::ScrollUp => {
            tui.row_table.scroll_up();
            Vec::new()
        }
        TuiEvent::ScrollDown => {
            tui.row_table.scroll_down();
            Vec::new()
        }
        TuiEvent::Resize => Vec::new(),
    }
}

/// Run `action` through the core and carry out the resulting effect.
/// Returns `true` when the app should quit.
pub fn dispatch(app: &mut App, tui: &TuiState, host: &mut dyn PrintHost, action: Action) -> bool {
    debug!("Dispatching {:?}", action);
    match update(app, action) {
        Effect::None => false,
        Effect::Quit => true,
        Effect::RowsChanged => {
            match app.store.to_json() {
                Ok(payload) => debug!("Row order changed: {}", payload),
                Err(e) => warn!("Failed to serialize rows: {}", e),
            }
            false
        }
        Effect::Print => {
            let outcome = print_markup(host, &app.print_title, &tui.row_table.rendered_markup);
            if let PrintOutcome::Printed { location } = outcome {
                app.status_message = match location {
                    Some(location) => format!("Printed to {}", location),
                    None => String::from("Printed"),
                };
            }
            false
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();
    let mut host = FileHost::new(config.print_dir.clone(), config.print_command.clone());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for action in actions_for(event, &app, &mut tui) {
                if dispatch(&mut app, &tui, &mut host, action) {
                    should_quit = true;
                }
            }
            if should_quit {
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down with {} rows", app.rows().len());
    ratatui::restore();
    Ok(())
}
