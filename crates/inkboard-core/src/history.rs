//! Snapshot-based undo/redo history.

use crate::shapes::Shape;

/// A deep copy of the whole shape list.
pub type Snapshot = Vec<Shape>;

/// Undo and redo stacks of whole-canvas snapshots.
///
/// Every commit pushes the state *after* an edit, so the top of the undo stack
/// mirrors the live canvas. Undoing therefore pops that top and restores the
/// entry beneath it; popping past the last entry means "back to a blank canvas".
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Maximum number of undo entries kept (None = unbounded).
    max_depth: Option<usize>,
}

impl History {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `max_depth` undo entries.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth.max(1)),
            ..Self::default()
        }
    }

    /// Record the state after an edit and drop any redo entries.
    pub fn commit(&mut self, current: &[Shape]) {
        self.undo_stack.push(current.to_vec());
        self.redo_stack.clear();

        if let Some(max) = self.max_depth {
            if self.undo_stack.len() > max {
                let excess = self.undo_stack.len() - max;
                self.undo_stack.drain(..excess);
            }
        }

        log::debug!(
            "History commit: {} shapes, undo depth {}",
            current.len(),
            self.undo_stack.len()
        );
    }

    /// Step back one edit, returning the state the canvas should show.
    ///
    /// Once history is exhausted and the canvas is already blank, this is a
    /// no-op and the redo stack is left alone.
    pub fn undo(&mut self, current: &[Shape]) -> Snapshot {
        if self.undo_stack.is_empty() && current.is_empty() {
            return Vec::new();
        }
        self.redo_stack.push(current.to_vec());

        let restored = if self.undo_stack.len() > 1 {
            self.undo_stack.pop();
            self.undo_stack.last().cloned().unwrap_or_default()
        } else {
            self.undo_stack.clear();
            Vec::new()
        };

        log::debug!(
            "History undo: undo depth {}, redo depth {}",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        restored
    }

    /// Re-apply the most recently undone state, if any.
    pub fn redo(&mut self) -> Option<Snapshot> {
        let restored = self.redo_stack.pop()?;
        log::debug!("History redo: redo depth {}", self.redo_stack.len());
        Some(restored)
    }

    /// Whether an undo would change anything.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of committed snapshots.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of undone snapshots waiting to be redone.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Most recently committed snapshot.
    pub fn latest(&self) -> Option<&[Shape]> {
        self.undo_stack.last().map(Vec::as_slice)
    }

    /// Forget every entry on both stacks.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
