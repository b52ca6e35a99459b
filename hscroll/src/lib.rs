//! A headless horizontal momentum-scroll engine for card carousels.
//!
//! For a scheduler-driven controller (frame/timer handles, mount/unmount), see the
//! `hscroll-adapter` crate.
//!
//! This crate turns vertical wheel/trackpad/keyboard input into horizontal navigation across a
//! row of fixed-width slots: accumulating wheel impulses, exponential friction, snap-to-item
//! alignment, and a derived active index for indicator dots.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport geometry (scroll offset, content and visible extents)
//! - the window width (for the slot breakpoint)
//! - the animation ticks and the scroll-end timer
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod carousel;
mod input;
mod layout;
mod momentum;
mod options;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use carousel::Carousel;
pub use input::{Key, WheelDelta, key_intent, wheel_intent};
pub use layout::ItemLayout;
pub use momentum::{Advance, Momentum};
pub use options::{CarouselOptions, ConfigError, OnActiveIndexChange, Tuning};
pub use state::{ScrollState, ViewportState};
pub use types::{
    Anchor, Intent, MomentumPhase, MomentumTick, ScrollBehavior, ScrollCommand, StepDirection,
};
