//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing title, row count and drag status
//!
//! ### Stateful Components
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrows it each
//! frame and records what it drew so mouse events can be hit-tested:
//! - `Toolbar`: The Add Row / Print Table buttons
//! - `RowTable`: The draggable table, plus the markup snapshot used by print
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into `App`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! RowTable::new(app.rows(), &app.drag, &app.title, &mut tui.row_table).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── toolbar.rs       (Buttons)
//! └── row_table.rs     (Draggable table)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod row_table;
pub use row_table::{RowTable, RowTableState};
pub mod toolbar;
pub use toolbar::{Toolbar, ToolbarButton, ToolbarState};
