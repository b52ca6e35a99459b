//! Adapter utilities for the `hscroll` crate.
//!
//! The `hscroll` crate is UI-agnostic and holds the core math and state. This crate adds the
//! parts every host needs around it:
//!
//! - A [`Controller`] that owns one engine plus the cancellable frame/timeout handles, and
//!   routes wheel, keyboard, and indicator input through a single intent dispatcher
//! - [`Scheduler`] / [`Viewport`] traits describing the host's event loop and scroll element
//! - In-memory hosts ([`ManualScheduler`], [`MemoryViewport`]) for headless loops and tests
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod scheduler;
mod tween;
mod viewport;


pub use controller::{Controller, EventOutcome};
pub use scheduler::{ManualScheduler, Scheduler, TaskId};
pub use tween::{Easing, Tween};
pub use viewport::{MemoryViewport, Viewport};
