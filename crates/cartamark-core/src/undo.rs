//! Snapshot-based undo/redo over the object collections.
//!
//! `record` is called immediately before a committing mutation, so each
//! snapshot restores exactly the state preceding one user action.

use crate::objects::{MapLine, MapPoint, ObjectList};

/// Maximum number of undo states to keep.
const MAX_UNDO_HISTORY: usize = 50;

#[derive(Debug, Clone)]
struct Snapshot {
    lines: ObjectList<MapLine>,
    points: ObjectList<MapPoint>,
}

/// Undo/redo stacks over both object collections.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current state. Call before making changes.
    pub fn record(&mut self, lines: &ObjectList<MapLine>, points: &ObjectList<MapPoint>) {
        self.undo_stack.push(Snapshot {
            lines: lines.clone(),
            points: points.clone(),
        });

        // New changes invalidate the redo stack.
        self.redo_stack.clear();

        if self.undo_stack.len() > MAX_UNDO_HISTORY {
            self.undo_stack.remove(0);
        }
    }

    /// Restore the most recent snapshot. Returns false if there is nothing
    /// to undo.
    pub fn undo(
        &mut self,
        lines: &mut ObjectList<MapLine>,
        points: &mut ObjectList<MapPoint>,
    ) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(Snapshot {
            lines: lines.clone(),
            points: points.clone(),
        });
        *lines = snapshot.lines;
        *points = snapshot.points;
        true
    }

    /// Re-apply the most recently undone change. Returns false if there is
    /// nothing to redo.
    pub fn redo(
        &mut self,
        lines: &mut ObjectList<MapLine>,
        points: &mut ObjectList<MapPoint>,
    ) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(Snapshot {
            lines: lines.clone(),
            points: points.clone(),
        });
        *lines = snapshot.lines;
        *points = snapshot.points;
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of recorded undo entries.
    pub fn depth(&self) -> usize {
        self.undo_stack.len()
    }
}
