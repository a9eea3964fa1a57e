//! # Core Table Logic
//!
//! Row ordering, the drag session, and the print pipeline.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • RowStore (rows)      │
//!                    │  • DragSession          │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No UI. No network.     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │ PrintHost  │      │ Persistence│
//!     │  Adapter   │      │ (file/lp)  │      │  (caller)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`rows`]: `Row`, `RowStore` and the reorder splice
//! - [`drag`]: `DragSession`, the transient drag markers
//! - [`state`]: The `App` struct, all table state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`print`]: Print hosts and surfaces
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod drag;
pub mod print;
pub mod rows;
pub mod state;
