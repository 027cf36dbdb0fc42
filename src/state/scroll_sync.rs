//! Mirrors the live grid's scroll offsets onto the frozen overlay.
//!
//! Each table instance owns one [`ScrollSync`]. The horizontal axis is driven
//! by the outer (header) scroll container, the vertical axis by the inner
//! (frozen column body) one. Every event overwrites the previous offset.

use std::time::Duration;

use tracing::trace;

/// Quiet time after the last scroll event before an axis counts as at rest.
pub const SETTLE_DELAY: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisState {
    #[default]
    AtRest,
    Scrolling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A translation in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translate {
    pub x: f64,
    pub y: f64,
}

impl Translate {
    pub fn css(&self) -> String {
        format!("transform: translate({}px, {}px);", self.x, self.y)
    }
}

/// Identifies one reported scroll event on an axis.
pub type ScrollSeq = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct AxisOffset {
    offset: f64,
    state: AxisState,
    seq: ScrollSeq,
}

impl AxisOffset {
    fn report(&mut self, offset: f64) -> ScrollSeq {
        self.offset = offset;
        self.state = AxisState::Scrolling;
        self.seq = self.seq.wrapping_add(1);
        self.seq
    }

    fn settle(&mut self, seq: ScrollSeq) -> bool {
        if seq != self.seq || self.state == AxisState::AtRest {
            return false;
        }
        self.state = AxisState::AtRest;
        true
    }
}

/// Scroll offset state of one rendered table. Starts at zero on mount.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSync {
    x: AxisOffset,
    y: AxisOffset,
}

impl ScrollSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset_x(&self) -> f64 {
        self.x.offset
    }

    pub fn offset_y(&self) -> f64 {
        self.y.offset
    }

    pub fn state(&self, axis: Axis) -> AxisState {
        match axis {
            Axis::Horizontal => self.x.state,
            Axis::Vertical => self.y.state,
        }
    }

    pub fn is_scrolling(&self) -> bool {
        self.x.state == AxisState::Scrolling || self.y.state == AxisState::Scrolling
    }

    /// Scroll event from the outer horizontal container.
    pub fn on_horizontal_scroll(&mut self, content_offset_x: f64) -> ScrollSeq {
        trace!(content_offset_x, "horizontal scroll");
        self.x.report(content_offset_x)
    }

    /// Scroll event from the inner vertical container.
    pub fn on_vertical_scroll(&mut self, content_offset_y: f64) -> ScrollSeq {
        trace!(content_offset_y, "vertical scroll");
        self.y.report(content_offset_y)
    }

    /// Returns the axis to rest if `seq` is still its latest event.
    ///
    /// A later event on the same axis makes an earlier settle a no-op.
    /// Returns whether the state changed.
    pub fn on_scroll_end(&mut self, axis: Axis, seq: ScrollSeq) -> bool {
        match axis {
            Axis::Horizontal => self.x.settle(seq),
            Axis::Vertical => self.y.settle(seq),
        }
    }

    /// Transform of the frozen overlay: the exact negative of the live offsets.
    pub fn overlay_transform(&self) -> Translate {
        // `0.0 - offset` keeps an untouched axis at +0 rather than -0.
        Translate {
            x: 0.0 - self.offset_x(),
            y: 0.0 - self.offset_y(),
        }
    }

    /// Transform of the live header rows, which follow the horizontal axis only.
    pub fn header_transform(&self) -> Translate {
        Translate {
            y: 0.0,
            ..self.overlay_transform()
        }
    }

    /// Transform of the frozen column body, which follows the vertical axis only.
    pub fn frozen_column_transform(&self) -> Translate {
        Translate {
            x: 0.0,
            ..self.overlay_transform()
        }
    }
}
