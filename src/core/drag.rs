//! # Drag Session
//!
//! Transient state for one pointer drag: which row was picked up and which
//! row it is currently over. Lives on `App`, reset on every way a drag can
//! end (drop, release outside the table, Esc).
//!
//! ```text
//! rest ──begin(i)──▶ dragging ──hover(j)*──▶ dragging+target ──end()──▶ rest
//! ```
//!
//! Indices are taken as given. Bounds are checked by the row store right
//! before it splices.

use log::debug;

/// Operation the drag transport should advertise (cursor / title feedback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Move,
}

impl DropEffect {
    pub fn label(self) -> &'static str {
        match self {
            DropEffect::Move => "move",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    dragging_index: Option<usize>,
    drag_over_index: Option<usize>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag on `index`.
    pub fn begin(&mut self, index: usize) -> DropEffect {
        debug!("Drag start on row {}", index);
        self.dragging_index = Some(index);
        self.drag_over_index = None;
        DropEffect::Move
    }

    /// Records the row currently under the pointer. Ignored when no drag is
    /// active, so stray drag-over events after a drop can't resurrect state.
    pub fn hover(&mut self, index: usize) {
        if self.dragging_index.is_none() {
            return;
        }
        if self.drag_over_index != Some(index) {
            debug!("Drag over row {}", index);
        }
        self.drag_over_index = Some(index);
    }

    /// Clears both markers. Safe to call any number of times.
    pub fn end(&mut self) {
        self.dragging_index = None;
        self.drag_over_index = None;
    }

    /// `(from, to)` when both markers are set.
    pub fn target(&self) -> Option<(usize, usize)> {
        Some((self.dragging_index?, self.drag_over_index?))
    }

    pub fn dragging_index(&self) -> Option<usize> {
        self.dragging_index
    }

    pub fn drag_over_index(&self) -> Option<usize> {
        self.drag_over_index
    }

    pub fn is_active(&self) -> bool {
        self.dragging_index.is_some()
    }

    /// The effect to advertise while a drag is active.
    pub fn effect(&self) -> Option<DropEffect> {
        self.dragging_index.map(|_| DropEffect::Move)
    }

    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragging_index == Some(index)
    }

    pub fn is_hover_target(&self, index: usize) -> bool {
        self.is_active() && self.drag_over_index == Some(index)
    }
}
