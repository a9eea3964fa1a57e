//! # Row Store
//!
//! The ordered sequence of table rows and the splice that reorders it.
//!
//! ```text
//! RowStore
//! ├── rows: Vec<Row>        // display order
//! └── default_role: String  // role given to appended rows
//! ```
//!
//! The store only ever grows (`append_row`) or permutes (`reorder`).
//! Row ids are unique at all times; they key rendering, never lookup.
//! The reorder engine works purely on positions.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "Viewer";

/// One record in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Row {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            role: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}

/// Rows the table starts with when the config doesn't seed any.
pub fn default_rows() -> Vec<Row> {
    vec![
        Row::new("1", "Alice")
            .with_email("alice@example.com")
            .with_role("Admin"),
        Row::new("2", "Bob")
            .with_email("bob@example.com")
            .with_role("Editor"),
        Row::new("3", "Carol")
            .with_email("carol@example.com")
            .with_role("Viewer"),
        Row::new("4", "Dave")
            .with_email("dave@example.com")
            .with_role("Editor"),
    ]
}

/// What a call to [`RowStore::reorder`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The row at `from` now sits at `to`.
    Moved,
    /// An index was unset, or `from == to`.
    Unchanged,
    /// An index fell outside the live sequence (stale drag). Nothing moved.
    Rejected,
}

/// Remove-then-insert on a copy of `rows`.
///
/// Unset indices, self-drops and out-of-range indices all return the input
/// order unchanged.
pub fn reorder(rows: &[Row], from: Option<usize>, to: Option<usize>) -> Vec<Row> {
    let mut next = rows.to_vec();
    splice(&mut next, from, to);
    next
}

fn splice(rows: &mut Vec<Row>, from: Option<usize>, to: Option<usize>) -> ReorderOutcome {
    let (Some(from), Some(to)) = (from, to) else {
        return ReorderOutcome::Unchanged;
    };
    if from >= rows.len() || to >= rows.len() {
        return ReorderOutcome::Rejected;
    }
    if from == to {
        return ReorderOutcome::Unchanged;
    }
    let moved = rows.remove(from);
    rows.insert(to, moved);
    ReorderOutcome::Moved
}

#[derive(Debug, Clone)]
pub struct RowStore {
    rows: Vec<Row>,
    default_role: String,
}

impl Default for RowStore {
    fn default() -> Self {
        Self::new(default_rows(), DEFAULT_ROLE)
    }
}

impl RowStore {
    /// Builds a store from seed rows. Callers are responsible for unique ids;
    /// config validation checks this before we get here.
    pub fn new(rows: Vec<Row>, default_role: impl Into<String>) -> Self {
        Self {
            rows,
            default_role: default_role.into(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Moves the row at `from` to `to`, validating both against the
    /// current length first.
    pub fn reorder(&mut self, from: Option<usize>, to: Option<usize>) -> ReorderOutcome {
        let outcome = splice(&mut self.rows, from, to);
        match outcome {
            ReorderOutcome::Moved => debug!("Moved row {:?} -> {:?}", from, to),
            ReorderOutcome::Rejected => warn!(
                "Rejected stale reorder {:?} -> {:?} (len={})",
                from,
                to,
                self.rows.len()
            ),
            ReorderOutcome::Unchanged => {}
        }
        outcome
    }

    /// Appends a placeholder row with a fresh id and returns it.
    ///
    /// The id starts at `len + 1` and counts up past any id already taken.
    pub fn append_row(&mut self) -> &Row {
        let mut n = self.rows.len() + 1;
        while self.contains_id(&n.to_string()) {
            n += 1;
        }
        let id = n.to_string();
        let row = Row::new(id.clone(), format!("New User {id}"))
            .with_email(format!("user{id}@example.com"))
            .with_role(self.default_role.clone());
        debug!("Appending row id={}", row.id);
        self.rows.push(row);
        &self.rows[self.rows.len() - 1]
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.rows.iter().any(|r| r.id == id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }

    /// The current sequence as JSON, the payload a persistence backend would take.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.rows)
    }
}
