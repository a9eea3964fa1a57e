//! # Application State
//!
//! Core table state. Domain data only; presentation state (scroll offset,
//! rendered markup, button hit areas) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: RowStore        // ordered rows
//! ├── drag: DragSession      // transient drag markers
//! ├── title: String          // heading above the table
//! ├── print_title: String    // <title> of printed documents
//! └── status_message: String // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::drag::DragSession;
use crate::core::rows::{Row, RowStore};

pub struct App {
    pub store: RowStore,
    pub drag: DragSession,
    pub title: String,
    pub print_title: String,
    pub status_message: String,
}

impl App {
    pub fn new(store: RowStore, title: String) -> Self {
        Self {
            store,
            drag: DragSession::new(),
            title,
            print_title: String::from(crate::core::config::DEFAULT_PRINT_TITLE),
            status_message: String::from("Drag a row to reorder it."),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let store = RowStore::new(config.rows.clone(), config.default_role.clone());
        let mut app = Self::new(store, config.title.clone());
        app.print_title = config.print_title.clone();
        app
    }

    pub fn rows(&self) -> &[Row] {
        self.store.rows()
    }
}
