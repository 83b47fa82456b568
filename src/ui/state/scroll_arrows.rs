// SPDX-License-Identifier: MPL-2.0
//! Horizontal scroll metrics of a content row and the arrows they imply.

/// Distance from the end (in logical pixels) under which the row counts as
/// fully scrolled.
pub const END_THRESHOLD: f32 = 10.0;

/// Snapshot of a horizontal scrollable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub content_width: f32,
    pub viewport_width: f32,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(offset: f32, content_width: f32, viewport_width: f32) -> Self {
        Self {
            offset,
            content_width,
            viewport_width,
        }
    }

    /// Largest reachable offset, 0 when everything fits.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    #[must_use]
    pub fn arrows(&self) -> ArrowVisibility {
        ArrowVisibility {
            left: self.offset > 0.0,
            right: self.offset < self.content_width - self.viewport_width - END_THRESHOLD,
        }
    }

    /// Offset reached by one arrow click: `fraction` of the viewport in
    /// `direction`, clamped to the scrollable range.
    #[must_use]
    pub fn step_target(&self, direction: ScrollDirection, fraction: f32) -> f32 {
        let step = self.viewport_width * fraction;
        let target = match direction {
            ScrollDirection::Left => self.offset - step,
            ScrollDirection::Right => self.offset + step,
        };
        target.clamp(0.0, self.max_offset())
    }

    /// Offset expressed as a fraction of the scrollable range.
    #[must_use]
    pub fn relative(&self, offset: f32) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            0.0
        } else {
            (offset / max).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Which row arrows are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowVisibility {
    pub left: bool,
    pub right: bool,
}

impl Default for ArrowVisibility {
    /// Before any scroll event the row sits at the start with more content
    /// to the right.
    fn default() -> Self {
        Self {
            left: false,
            right: true,
        }
    }
}
