/// Fixed-width slot layout of the carousel items.
///
/// Item `i` starts at `i * slot_width`, where the slot width (card width plus gap) depends on
/// whether the window is narrower than `breakpoint`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemLayout {
    pub count: usize,
    /// Slot width used when the window is narrower than `breakpoint`.
    pub narrow_slot: f64,
    /// Slot width used otherwise.
    pub wide_slot: f64,
    pub breakpoint: f64,
}

impl ItemLayout {
    pub const DEFAULT_NARROW_SLOT: f64 = 280.0 + 16.0;
    pub const DEFAULT_WIDE_SLOT: f64 = 320.0 + 24.0;
    pub const DEFAULT_BREAKPOINT: f64 = 768.0;

    pub fn new(count: usize) -> Self {
        Self {
            count,
            narrow_slot: Self::DEFAULT_NARROW_SLOT,
            wide_slot: Self::DEFAULT_WIDE_SLOT,
            breakpoint: Self::DEFAULT_BREAKPOINT,
        }
    }

    /// A layout whose slot width does not depend on the window width.
    pub fn uniform(count: usize, slot_width: f64) -> Self {
        Self {
            count,
            narrow_slot: slot_width,
            wide_slot: slot_width,
            breakpoint: Self::DEFAULT_BREAKPOINT,
        }
    }

    pub fn with_slots(mut self, narrow_slot: f64, wide_slot: f64) -> Self {
        self.narrow_slot = narrow_slot;
        self.wide_slot = wide_slot;
        self
    }

    pub fn with_breakpoint(mut self, breakpoint: f64) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn slot_width(&self, window_width: f64) -> f64 {
        if window_width < self.breakpoint {
            self.narrow_slot
        } else {
            self.wide_slot
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn max_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.max_index())
    }

    /// Start offset of `index` (unclamped against the viewport).
    pub fn item_offset(&self, index: usize, slot_width: f64) -> f64 {
        index as f64 * slot_width
    }

    /// `round(offset / slot_width)`, clamped to `[0, count - 1]`.
    pub fn nearest_index(&self, offset: f64, slot_width: f64) -> usize {
        if self.count == 0 || slot_width <= 0.0 || !offset.is_finite() {
            return 0;
        }
        let raw = (offset / slot_width).round();
        if raw <= 0.0 {
            return 0;
        }
        // Float-to-int casts saturate, so huge offsets land on the last item.
        self.clamp_index(raw as usize)
    }
}

impl Default for ItemLayout {
    fn default() -> Self {
        Self::new(0)
    }
}
