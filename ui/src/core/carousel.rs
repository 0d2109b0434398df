//! Slide-state machines for the two carousels on the page.
//!
//! Both are plain values so the owning component can keep them in a
//! `Signal` and mutate them with `with_mut`. Positions only ever change
//! through these methods, which keeps them inside their valid ranges.

use std::ops::Range;

/// Auto-advancing single-image carousel (gallery).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoCarousel {
    index: usize,
    len: usize,
}

impl AutoCarousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Timer transition: advance one slide, wrapping to the first after the last.
    pub fn tick(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Jump straight to a slide (thumbnail click). Out-of-range input is ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

/// Number of timer ticks that fire in `elapsed_ms` at one tick per `interval_ms`.
pub fn ticks_for(elapsed_ms: u64, interval_ms: u64) -> u64 {
    if interval_ms == 0 {
        return 0;
    }
    elapsed_ms / interval_ms
}

/// Windowed carousel paged by prev/next buttons and indicator dots (teachers).
///
/// `offset` is the index of the first visible item; valid offsets are
/// `0..=max_offset()`. Paging wraps at both ends instead of clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagedCarousel {
    offset: usize,
    len: usize,
    window: usize,
}

impl PagedCarousel {
    pub fn new(len: usize, window: usize) -> Self {
        Self {
            offset: 0,
            len,
            window: window.max(1),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn max_offset(&self) -> usize {
        self.len.saturating_sub(self.window)
    }

    /// Number of indicator dots.
    pub fn page_count(&self) -> usize {
        self.max_offset() + 1
    }

    pub fn next(&mut self) {
        self.offset = if self.offset >= self.max_offset() {
            0
        } else {
            self.offset + 1
        };
    }

    pub fn prev(&mut self) {
        self.offset = if self.offset == 0 {
            self.max_offset()
        } else {
            self.offset - 1
        };
    }

    /// Indicator dot click. Offsets past `max_offset()` are ignored.
    pub fn go_to(&mut self, offset: usize) -> bool {
        if offset <= self.max_offset() {
            self.offset = offset;
            true
        } else {
            false
        }
    }

    /// Item indices currently inside the window.
    pub fn visible(&self) -> Range<usize> {
        self.offset..(self.offset + self.window).min(self.len)
    }

    /// Horizontal track shift for the current offset, in percent of the track.
    pub fn translate_percent(&self) -> f64 {
        self.offset as f64 * (100.0 / self.window as f64)
    }
}
