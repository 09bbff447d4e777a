//! Undo/Redo system for stroke operations.
//!
//! Each image in the session has its own pair of stacks. Every reversible
//! edit is an [`Action`] that stores enough information to reverse itself.
//! Notes are deliberately not tracked here; only stroke actions are
//! reversible.

use std::collections::HashMap;

use crate::model::{Stroke, StrokeId};
use crate::store::AnnotationStore;

// ============================================================================
// Action Types
// ============================================================================

/// A reversible stroke edit.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A stroke was drawn and committed on top of the stack
    AddStroke {
        /// The committed stroke
        stroke: Stroke,
    },
    /// A stroke was erased
    RemoveStroke {
        /// The erased stroke (stored for undo)
        stroke: Stroke,
        /// Its position in the stroke list before removal
        index: usize,
    },
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::AddStroke { .. } => "Draw stroke",
            Action::RemoveStroke { .. } => "Erase stroke",
        }
    }

    /// The stroke this action touches
    pub fn stroke(&self) -> &Stroke {
        match self {
            Action::AddStroke { stroke } | Action::RemoveStroke { stroke, .. } => stroke,
        }
    }
}

// ============================================================================
// Undo Stack
// ============================================================================

/// The undo/redo history of a single image.
///
/// Maintains two stacks:
/// - `undo_stack`: Actions that can be undone (most recent at the end)
/// - `redo_stack`: Actions that can be redone (most recent at the end)
///
/// Both stacks are unbounded; they live only as long as the session.
#[derive(Debug, Clone, Default)]
pub struct UndoStack {
    undo_stack: Vec<Action>,
    redo_stack: Vec<Action>,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an action to the undo stack.
    /// This clears the redo stack (can't redo after a new action).
    pub fn push(&mut self, action: Action) {
        log::debug!("Undo: pushed '{}' ({})", action.description(), action.stroke().id);
        self.undo_stack.push(action);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Pop an action for undoing; it moves to the redo stack.
    pub fn pop_undo(&mut self) -> Option<Action> {
        let action = self.undo_stack.pop()?;
        log::debug!("Undo: '{}'", action.description());
        self.redo_stack.push(action.clone());
        Some(action)
    }

    /// Pop an action for redoing; it moves back to the undo stack.
    pub fn pop_redo(&mut self) -> Option<Action> {
        let action = self.redo_stack.pop()?;
        log::debug!("Redo: '{}'", action.description());
        self.undo_stack.push(action.clone());
        Some(action)
    }

    /// Drop everything that could be redone.
    pub fn clear_redo(&mut self) {
        if !self.redo_stack.is_empty() {
            log::debug!("Redo history cleared ({} actions)", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    pub fn undo_description(&self) -> Option<&'static str> {
        self.undo_stack.last().map(Action::description)
    }

    pub fn redo_description(&self) -> Option<&'static str> {
        self.redo_stack.last().map(Action::description)
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

// ============================================================================
// Per-image History
// ============================================================================

/// Undo stacks for every image of a session, keyed by image index.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    stacks: HashMap<usize, UndoStack>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stack of an image, if it ever recorded anything.
    pub fn stack(&self, index: usize) -> Option<&UndoStack> {
        self.stacks.get(&index)
    }

    fn stack_mut(&mut self, index: usize) -> &mut UndoStack {
        self.stacks.entry(index).or_default()
    }

    pub fn record(&mut self, index: usize, action: Action) {
        self.stack_mut(index).push(action);
    }

    pub fn clear_redo(&mut self, index: usize) {
        if let Some(stack) = self.stacks.get_mut(&index) {
            stack.clear_redo();
        }
    }

    pub fn can_undo(&self, index: usize) -> bool {
        self.stack(index).is_some_and(UndoStack::can_undo)
    }

    pub fn can_redo(&self, index: usize) -> bool {
        self.stack(index).is_some_and(UndoStack::can_redo)
    }

    pub fn undo_description(&self, index: usize) -> Option<&'static str> {
        self.stack(index).and_then(UndoStack::undo_description)
    }

    pub fn redo_description(&self, index: usize) -> Option<&'static str> {
        self.stack(index).and_then(UndoStack::redo_description)
    }
}

// ============================================================================
// Forward Actions
// ============================================================================

/// Commit a finished stroke on top of the image's stroke list.
pub fn commit_stroke(
    history: &mut UndoHistory,
    store: &mut AnnotationStore,
    index: usize,
    stroke: Stroke,
) {
    store.push_stroke(index, stroke.clone());
    history.record(index, Action::AddStroke { stroke });
}

/// Erase a committed stroke, remembering where it sat in the list.
/// Returns false if the stroke is not on that image.
pub fn delete_stroke(
    history: &mut UndoHistory,
    store: &mut AnnotationStore,
    index: usize,
    id: StrokeId,
) -> bool {
    let Some((position, stroke)) = store.remove_stroke(index, id) else {
        return false;
    };

    history.record(
        index,
        Action::RemoveStroke {
            stroke,
            index: position,
        },
    );
    true
}

// ============================================================================
// Undo/Redo Execution
// ============================================================================

/// Undo the most recent action of an image.
/// Returns false if there was nothing to undo.
pub fn undo_action(history: &mut UndoHistory, store: &mut AnnotationStore, index: usize) -> bool {
    let Some(action) = history.stack_mut(index).pop_undo() else {
        return false;
    };

    apply_undo(&action, store, index);
    true
}

/// Redo the most recently undone action of an image.
/// Returns false if there was nothing to redo.
pub fn redo_action(history: &mut UndoHistory, store: &mut AnnotationStore, index: usize) -> bool {
    let Some(action) = history.stack_mut(index).pop_redo() else {
        return false;
    };

    apply_redo(&action, store, index);
    true
}

fn apply_undo(action: &Action, store: &mut AnnotationStore, index: usize) {
    match action {
        Action::AddStroke { stroke } => {
            store.remove_stroke(index, stroke.id);
            log::debug!("Undid draw of {}", stroke.id);
        }
        Action::RemoveStroke {
            stroke,
            index: position,
        } => {
            // Back to its original slot so stacking order is unchanged
            store.insert_stroke(index, *position, stroke.clone());
            log::debug!("Undid erase of {} at {}", stroke.id, position);
        }
    }
}

fn apply_redo(action: &Action, store: &mut AnnotationStore, index: usize) {
    match action {
        Action::AddStroke { stroke } => {
            store.push_stroke(index, stroke.clone());
            log::debug!("Redid draw of {}", stroke.id);
        }
        Action::RemoveStroke { stroke, .. } => {
            store.remove_stroke(index, stroke.id);
            log::debug!("Redid erase of {}", stroke.id);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
