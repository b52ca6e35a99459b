use std::sync::Arc;

use crate::ItemLayout;

/// A callback fired when the derived active index changes.
pub type OnActiveIndexChange = Arc<dyn Fn(usize) + Send + Sync>;

/// Physics and tolerance constants.
///
/// The defaults are tuning values with no derivation beyond "feels right on a trackpad"; they are
/// kept configurable rather than interpreted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    /// Amplification applied to each wheel `delta_y` before it is added to the velocity.
    pub wheel_multiplier: f64,
    /// Per-tick velocity decay factor, in `(0, 1)`.
    pub friction: f64,
    /// Velocity floor; at or below it the momentum is forced to zero. Must be positive, or the
    /// decay never reaches it.
    pub min_velocity: f64,
    /// Distance within which the viewport counts as already at its start/end.
    pub edge_epsilon: f64,
    /// Distance within which an offset counts as aligned to a snap target.
    pub snap_epsilon: f64,
}

impl Tuning {
    pub const DEFAULT_WHEEL_MULTIPLIER: f64 = 1.2;
    pub const DEFAULT_FRICTION: f64 = 0.92;
    pub const DEFAULT_MIN_VELOCITY: f64 = 0.5;
    pub const DEFAULT_EDGE_EPSILON: f64 = 1.0;
    pub const DEFAULT_SNAP_EPSILON: f64 = 0.5;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !(self.wheel_multiplier.is_finite() && self.wheel_multiplier > 0.0) {
            return Err(ConfigError::InvalidMultiplier(self.wheel_multiplier));
        }
        if !(self.min_velocity.is_finite() && self.min_velocity > 0.0) {
            return Err(ConfigError::InvalidMinVelocity(self.min_velocity));
        }
        Ok(())
    }

    /// Replaces any value `validate` would reject with its default.
    ///
    /// A friction outside `(0, 1)` would never settle, so the engine always runs on sanitized
    /// tuning.
    pub fn sanitized(&self) -> Self {
        let mut out = *self;
        if !(out.friction > 0.0 && out.friction < 1.0) {
            hwarn!(friction = out.friction, "Tuning: friction outside (0, 1), using default");
            out.friction = Self::DEFAULT_FRICTION;
        }
        if !(out.wheel_multiplier.is_finite() && out.wheel_multiplier > 0.0) {
            hwarn!(
                wheel_multiplier = out.wheel_multiplier,
                "Tuning: invalid wheel multiplier, using default"
            );
            out.wheel_multiplier = Self::DEFAULT_WHEEL_MULTIPLIER;
        }
        if !(out.min_velocity.is_finite() && out.min_velocity > 0.0) {
            hwarn!(
                min_velocity = out.min_velocity,
                "Tuning: invalid min velocity, using default"
            );
            out.min_velocity = Self::DEFAULT_MIN_VELOCITY;
        }
        if !(out.edge_epsilon.is_finite() && out.edge_epsilon >= 0.0) {
            out.edge_epsilon = Self::DEFAULT_EDGE_EPSILON;
        }
        if !(out.snap_epsilon.is_finite() && out.snap_epsilon >= 0.0) {
            out.snap_epsilon = Self::DEFAULT_SNAP_EPSILON;
        }
        out
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            wheel_multiplier: Self::DEFAULT_WHEEL_MULTIPLIER,
            friction: Self::DEFAULT_FRICTION,
            min_velocity: Self::DEFAULT_MIN_VELOCITY,
            edge_epsilon: Self::DEFAULT_EDGE_EPSILON,
            snap_epsilon: Self::DEFAULT_SNAP_EPSILON,
        }
    }
}

/// A rejected configuration value.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("friction must be in (0, 1), got {0}")]
    InvalidFriction(f64),
    #[error("wheel multiplier must be finite and positive, got {0}")]
    InvalidMultiplier(f64),
    #[error("min velocity must be finite and positive, got {0}")]
    InvalidMinVelocity(f64),
    #[error("slot width must be finite and positive, got {0}")]
    InvalidSlotWidth(f64),
    #[error("scroll-end delay must be at least 1ms")]
    InvalidDebounce,
}

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the only heavy field is the callback, stored in an `Arc`.
pub struct CarouselOptions {
    pub layout: ItemLayout,
    pub tuning: Tuning,
    /// Quiet period after the last scroll event before a scroll-end snap is evaluated.
    pub scroll_end_delay_ms: u64,
    /// Window width used for the slot breakpoint until the host reports a resize.
    pub initial_window_width: f64,
    pub on_active_index_change: Option<OnActiveIndexChange>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            layout: self.layout,
            tuning: self.tuning,
            scroll_end_delay_ms: self.scroll_end_delay_ms,
            initial_window_width: self.initial_window_width,
            on_active_index_change: self.on_active_index_change.clone(),
        }
    }
}

impl CarouselOptions {
    pub const DEFAULT_SCROLL_END_DELAY_MS: u64 = 100;

    /// Creates options for `count` items with the default two-breakpoint slot layout.
    pub fn new(count: usize) -> Self {
        Self::with_layout(ItemLayout::new(count))
    }

    pub fn with_layout(layout: ItemLayout) -> Self {
        Self {
            layout,
            tuning: Tuning::default(),
            scroll_end_delay_ms: Self::DEFAULT_SCROLL_END_DELAY_MS,
            initial_window_width: layout.breakpoint,
            on_active_index_change: None,
        }
    }

    pub fn with_tuning(mut self, tuning: Tuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn with_wheel_multiplier(mut self, wheel_multiplier: f64) -> Self {
        self.tuning.wheel_multiplier = wheel_multiplier;
        self
    }

    pub fn with_friction(mut self, friction: f64) -> Self {
        self.tuning.friction = friction;
        self
    }

    pub fn with_min_velocity(mut self, min_velocity: f64) -> Self {
        self.tuning.min_velocity = min_velocity;
        self
    }

    pub fn with_scroll_end_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_end_delay_ms = delay_ms;
        self
    }

    pub fn with_initial_window_width(mut self, window_width: f64) -> Self {
        self.initial_window_width = window_width;
        self
    }

    pub fn with_on_active_index_change(
        mut self,
        on_change: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_active_index_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Checks tuning, slot widths, and the debounce delay.
    ///
    /// [`crate::Carousel::new`] never fails; it sanitizes instead. Call this when options come
    /// from user-editable configuration and you want to surface mistakes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tuning.validate()?;
        for slot in [self.layout.narrow_slot, self.layout.wide_slot] {
            if !(slot.is_finite() && slot > 0.0) {
                return Err(ConfigError::InvalidSlotWidth(slot));
            }
        }
        if self.scroll_end_delay_ms == 0 {
            return Err(ConfigError::InvalidDebounce);
        }
        Ok(())
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("layout", &self.layout)
            .field("tuning", &self.tuning)
            .field("scroll_end_delay_ms", &self.scroll_end_delay_ms)
            .field("initial_window_width", &self.initial_window_width)
            .finish_non_exhaustive()
    }
}
