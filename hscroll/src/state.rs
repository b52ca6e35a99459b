use crate::MomentumPhase;

/// A lightweight, serializable snapshot of the viewport geometry along the horizontal axis.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: f64,
    pub content_extent: f64,
    pub visible_extent: f64,
}

impl ViewportState {
    pub fn new(scroll_offset: f64, content_extent: f64, visible_extent: f64) -> Self {
        Self {
            scroll_offset,
            content_extent,
            visible_extent,
        }
    }

    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_extent - self.visible_extent).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if !offset.is_finite() {
            return self.scroll_offset;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Whether the viewport can still move toward the end, ignoring the last `epsilon` units.
    pub fn can_scroll_forward(&self, epsilon: f64) -> bool {
        self.scroll_offset < self.content_extent - self.visible_extent - epsilon
    }

    /// Whether the viewport can still move toward the start, ignoring the first `epsilon` units.
    pub fn can_scroll_backward(&self, epsilon: f64) -> bool {
        self.scroll_offset > epsilon
    }
}

/// A lightweight, serializable snapshot of the controller-visible scroll state.
///
/// Useful for debug overlays or for asserting on state in tests without borrowing the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub viewport: ViewportState,
    pub velocity: f64,
    pub active_index: usize,
    pub phase: MomentumPhase,
}
