#![forbid(unsafe_code)]

//! Linear undo/redo history over arbitrary value snapshots.
//!
//! [`History`] holds one `present` value plus two timeline stacks: `past`
//! (oldest first) and `future` (nearest first). A new [`set`](History::set)
//! after undos discards the future: the timeline is strictly linear, with
//! no redo branches. Undo and redo at the history boundaries degrade to
//! no-ops rather than signaling errors, so UI controls can invoke them
//! unconditionally.
//!
//! # Example
//!
//! ```
//! use trellis_history::History;
//!
//! let mut h = History::new("draft 1".to_owned());
//! h.set("draft 2".to_owned());
//! assert!(h.undo());
//! assert_eq!(h.present(), "draft 1");
//! assert!(h.redo());
//! assert_eq!(h.present(), "draft 2");
//! ```

use std::collections::VecDeque;

/// Default cap on retained past snapshots.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// A linear undo/redo container for one value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct History<T> {
    /// Past snapshots, oldest first.
    past: Vec<T>,
    present: T,
    /// Undone snapshots, nearest-future first.
    future: VecDeque<T>,
    max_depth: usize,
}

impl<T> History<T> {
    /// Create a history seeded with the initial present value.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: VecDeque::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum number of retained past snapshots.
    ///
    /// When the cap is exceeded the oldest snapshot is evicted; undo then
    /// simply bottoms out earlier. A cap of zero disables undo entirely.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The current value.
    #[must_use]
    pub fn present(&self) -> &T {
        &self.present
    }

    /// Mutable access to the current value.
    ///
    /// Edits made this way are not recorded; call [`set`](Self::set) to
    /// create an undo point.
    pub fn present_mut(&mut self) -> &mut T {
        &mut self.present
    }

    /// Past snapshots, oldest first.
    #[must_use]
    pub fn past(&self) -> &[T] {
        &self.past
    }

    /// Number of undoable steps.
    #[must_use]
    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    /// Number of redoable steps.
    #[must_use]
    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    /// Whether undo would change the present value.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether redo would change the present value.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Record a new present value.
    ///
    /// The old present is pushed onto the past and any redo history is
    /// discarded: after a write, previously undone values are unreachable.
    pub fn set(&mut self, value: T) {
        let previous = std::mem::replace(&mut self.present, value);
        self.past.push(previous);
        if self.past.len() > self.max_depth {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Step back one snapshot. No-op at the boundary.
    ///
    /// Returns `true` when the present value changed.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one snapshot. No-op at the boundary.
    ///
    /// Returns `true` when the present value changed.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    /// Drop all past and future snapshots, keeping the present value.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Consume the history, returning the present value.
    #[must_use]
    pub fn into_present(self) -> T {
        self.present
    }
}

impl<T: Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
