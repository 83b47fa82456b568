// SPDX-License-Identifier: MPL-2.0
//! Circular index over a fixed-length list.

/// Current position in a list of `len` entries.
///
/// An empty carousel has no current index; advancing it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the highlighted entry, `None` when empty.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Moves to the next entry, wrapping to 0 after the last one.
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jumps to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Whether the list is long enough to rotate.
    #[must_use]
    pub fn rotates(&self) -> bool {
        self.len > 1
    }
}
