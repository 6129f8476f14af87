//! Undo stack and the undo/redo operations on [`StrokeLog`].

use std::collections::VecDeque;

use crate::draw::UndoOp;

use super::StrokeLog;

/// LIFO stack of reversal operations recorded by undo.
///
/// Only undo pushes entries. Redo pops them, and any forward mutation of the
/// dataset discards them all.
#[derive(Debug, Clone, Default)]
pub struct History {
    stack: VecDeque<UndoOp>,
    /// Maximum number of stored operations (0 = unlimited)
    max_depth: usize,
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            stack: VecDeque::new(),
            max_depth,
        }
    }

    /// Records an operation, dropping the oldest one when over the limit.
    pub(crate) fn push(&mut self, op: UndoOp) {
        self.stack.push_back(op);
        if self.max_depth > 0 && self.stack.len() > self.max_depth {
            self.stack.pop_front();
            log::warn!(
                "Undo history limit ({}) reached; dropped oldest entry",
                self.max_depth
            );
        }
    }

    pub(crate) fn pop(&mut self) -> Option<UndoOp> {
        self.stack.pop_back()
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
    }

    /// Returns the operation redo would replay next.
    pub fn peek(&self) -> Option<&UndoOp> {
        self.stack.back()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Iterates stored operations from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &UndoOp> {
        self.stack.iter()
    }
}

impl StrokeLog {
    /// Removes the newest point, or the newest segment when it holds only one
    /// point, and records how to put it back.
    ///
    /// No-op on an empty dataset. Never leaves an empty segment behind.
    pub fn undo(&mut self) {
        let Some(op) = self.frame.remove_tail() else {
            log::debug!("Nothing to undo");
            return;
        };

        match &op {
            UndoOp::AppendPoint { .. } => log::debug!("Undid last point"),
            UndoOp::ReinsertSegment { .. } => log::debug!("Undid last segment"),
        }
        self.history.push(op);
        self.needs_redraw = true;
    }

    /// Replays the most recent undo onto the dataset tail.
    ///
    /// No-op when the undo stack is empty. Redo records nothing itself; a later
    /// undo records a fresh entry.
    pub fn redo(&mut self) {
        let Some(op) = self.history.pop() else {
            log::debug!("Nothing to redo");
            return;
        };

        if self.frame.apply_undo_op(op) {
            self.needs_redraw = true;
            log::debug!("Redo applied ({} left)", self.history.len());
        } else {
            // Only reachable if the stack and frame fell out of step.
            log::warn!("Redo had no segment to attach to; operation dropped");
        }
    }
}
