//! Selection model for text-editing widgets.
//!
//! A [`Selection`] tracks an optional contiguous half-open range
//! `[lower, upper)` over a sequence of characters. It does not know about the
//! sequence itself; widgets feed it cursor positions.
//!
//! The selection has three modes:
//!
//! - inactive: nothing is selected,
//! - growing: the range follows the cursor from a fixed anchor,
//! - stopped: the range is frozen but can be resumed.
//!
//! # Example
//!
//! ```
//! use tessera_core::Selection;
//!
//! let mut sel = Selection::new();
//! sel.start(3);
//! sel.follow(7);
//! assert_eq!((sel.lower(), sel.upper()), (3, 7));
//!
//! // Crossing the anchor swaps the ends instead of inverting the range.
//! sel.follow(1);
//! assert_eq!((sel.lower(), sel.upper()), (1, 3));
//!
//! sel.cancel();
//! assert!(!sel.is_set());
//! ```

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Inactive,
    Growing,
    Stopped,
}

/// An optional contiguous selection range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    anchor: usize,
    head: usize,
    mode: Mode,
}

impl Selection {
    /// Create an inactive selection.
    pub const fn new() -> Self {
        Self {
            anchor: 0,
            head: 0,
            mode: Mode::Inactive,
        }
    }

    /// Begin a growing selection anchored at `pos`.
    pub fn start(&mut self, pos: usize) {
        self.anchor = pos;
        self.head = pos;
        self.mode = Mode::Growing;
    }

    /// Move the growing boundary to `pos`.
    ///
    /// Does nothing while inactive. A stopped selection is cancelled, which
    /// is how plain cursor movement discards a frozen range.
    pub fn follow(&mut self, pos: usize) {
        match self.mode {
            Mode::Inactive => {}
            Mode::Growing => self.head = pos,
            Mode::Stopped => self.cancel(),
        }
    }

    /// Freeze the current range. It can be resumed later.
    pub fn stop(&mut self) {
        if self.mode == Mode::Growing {
            self.mode = Mode::Stopped;
        }
    }

    /// Let a frozen range grow again from its anchor.
    pub fn resume(&mut self) {
        if self.mode == Mode::Stopped {
            self.mode = Mode::Growing;
        }
    }

    /// Clear the selection entirely.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    /// Select `length` positions starting at `from`.
    ///
    /// A growing selection keeps growing; otherwise the result is a stopped
    /// selection.
    pub fn set_span(&mut self, from: usize, length: usize) {
        self.set_from_to(from, from.saturating_add(length));
    }

    /// Select the range between `from` and `to`, in either order.
    ///
    /// `from` becomes the anchor and `to` the growing end.
    pub fn set_from_to(&mut self, from: usize, to: usize) {
        self.anchor = from;
        self.head = to;
        if self.mode != Mode::Growing {
            self.mode = Mode::Stopped;
        }
    }

    /// Restrict the range to a sequence of `len` positions.
    pub fn clamp_to(&mut self, len: usize) {
        self.anchor = self.anchor.min(len);
        self.head = self.head.min(len);
    }

    /// Returns true if a non-empty range is selected.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.mode != Mode::Inactive && self.anchor != self.head
    }

    /// Returns true if the range is empty or inactive.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.is_set()
    }

    /// Returns true while the range follows the cursor.
    #[inline]
    pub fn is_growing(&self) -> bool {
        self.mode == Mode::Growing
    }

    /// Returns true if the range is frozen.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.mode == Mode::Stopped
    }

    /// Returns true if no selection is in progress or frozen.
    #[inline]
    pub fn is_inactive(&self) -> bool {
        self.mode == Mode::Inactive
    }

    /// Inclusive start of the range.
    #[inline]
    pub fn lower(&self) -> usize {
        if self.mode == Mode::Inactive {
            return 0;
        }
        self.anchor.min(self.head)
    }

    /// Exclusive end of the range.
    #[inline]
    pub fn upper(&self) -> usize {
        if self.mode == Mode::Inactive {
            return 0;
        }
        self.anchor.max(self.head)
    }

    /// Number of selected positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.upper() - self.lower()
    }

    /// The selected range, empty when nothing is selected.
    pub fn range(&self) -> Range<usize> {
        self.lower()..self.upper()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_follow() {
        let mut sel = Selection::new();
        sel.start(3);
        assert!(!sel.is_set()); // empty until the cursor moves
        sel.follow(7);
        assert_eq!(sel.lower(), 3);
        assert_eq!(sel.upper(), 7);
        assert_eq!(sel.len(), 4);
        assert!(sel.is_set());
    }

    #[test]
    fn test_follow_across_anchor_swaps_ends() {
        let mut sel = Selection::new();
        sel.start(3);
        sel.follow(7);
        sel.follow(1);
        assert_eq!(sel.lower(), 1);
        assert_eq!(sel.upper(), 3);

        sel.cancel();
        assert!(sel.is_empty());
        assert_eq!(sel.range(), 0..0);
    }

    #[test]
    fn test_follow_is_noop_while_inactive() {
        let mut sel = Selection::new();
        sel.follow(5);
        assert!(sel.is_inactive());
        assert!(!sel.is_set());
    }

    #[test]
    fn test_follow_cancels_stopped_selection() {
        let mut sel = Selection::new();
        sel.start(2);
        sel.follow(5);
        sel.stop();
        assert!(sel.is_set());
        assert!(sel.is_stopped());

        sel.follow(6);
        assert!(sel.is_inactive());
    }

    #[test]
    fn test_resume_keeps_anchor() {
        let mut sel = Selection::new();
        sel.start(4);
        sel.follow(8);
        sel.stop();
        sel.resume();
        sel.follow(10);
        assert_eq!(sel.range(), 4..10);
    }

    #[test]
    fn test_set_span_normalizes() {
        let mut sel = Selection::new();
        sel.set_span(2, 3);
        assert_eq!(sel.range(), 2..5);
        assert!(sel.is_stopped());

        sel.set_from_to(9, 4);
        assert_eq!(sel.lower(), 4);
        assert_eq!(sel.upper(), 9);
    }

    #[test]
    fn test_set_from_to_while_growing_keeps_growing() {
        let mut sel = Selection::new();
        sel.start(0);
        sel.set_from_to(6, 2);
        assert!(sel.is_growing());
        sel.follow(1);
        assert_eq!(sel.range(), 1..6);
    }

    #[test]
    fn test_clamp_to_shorter_sequence() {
        let mut sel = Selection::new();
        sel.set_span(3, 10);
        sel.clamp_to(5);
        assert_eq!(sel.range(), 3..5);

        sel.clamp_to(0);
        assert!(!sel.is_set());
    }
}
