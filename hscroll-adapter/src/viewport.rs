use hscroll::{ScrollBehavior, ScrollCommand, ViewportState};

use crate::{Easing, Tween};

/// The host's horizontally scrollable element.
///
/// The rendered element is the authoritative source of the scroll offset; the controller reads
/// it back before acting and only ever writes through [`Viewport::scroll_to`].
pub trait Viewport {
    fn scroll_offset(&self) -> f64;

    fn content_extent(&self) -> f64;

    fn visible_extent(&self) -> f64;

    /// Applies a scroll write. Hosts are expected to clamp to their scrollable range, as a DOM
    /// element does for `scrollLeft`.
    fn scroll_to(&mut self, command: ScrollCommand);

    fn state(&self) -> ViewportState {
        ViewportState::new(
            self.scroll_offset(),
            self.content_extent(),
            self.visible_extent(),
        )
    }
}

/// An in-memory viewport that behaves like a scroll container.
///
/// - Writes are clamped to `[0, content - visible]`.
/// - `Instant` writes land immediately and cancel any smooth scroll.
/// - `Smooth` writes start a [`Tween`] that [`MemoryViewport::tick`] plays back; a new smooth
///   write replaces the running one.
/// - Every command is recorded for inspection.
#[derive(Clone, Debug)]
pub struct MemoryViewport {
    offset: f64,
    content_extent: f64,
    visible_extent: f64,
    now_ms: u64,
    smooth_duration_ms: u64,
    easing: Easing,
    tween: Option<Tween>,
    commands: Vec<ScrollCommand>,
}

impl MemoryViewport {
    pub const DEFAULT_SMOOTH_DURATION_MS: u64 = 300;

    pub fn new(content_extent: f64, visible_extent: f64) -> Self {
        Self {
            offset: 0.0,
            content_extent,
            visible_extent,
            now_ms: 0,
            smooth_duration_ms: Self::DEFAULT_SMOOTH_DURATION_MS,
            easing: Easing::EaseInOut,
            tween: None,
            commands: Vec::new(),
        }
    }

    pub fn with_smooth_scroll(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.smooth_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = self.clamp(offset);
        self
    }

    pub fn commands(&self) -> &[ScrollCommand] {
        &self.commands
    }

    /// Recorded `Smooth` commands only (momentum ticks are `Instant`).
    pub fn smooth_commands(&self) -> impl Iterator<Item = &ScrollCommand> + '_ {
        self.commands
            .iter()
            .filter(|c| c.behavior == ScrollBehavior::Smooth)
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn is_smooth_scrolling(&self) -> bool {
        self.tween.is_some()
    }

    pub fn smooth_target(&self) -> Option<f64> {
        self.tween.map(|t| t.to)
    }

    pub fn resize(&mut self, content_extent: f64, visible_extent: f64) {
        self.content_extent = content_extent;
        self.visible_extent = visible_extent;
        self.offset = self.clamp(self.offset);
    }

    /// Simulates the user dragging/flicking the element directly (touch, scrollbar).
    ///
    /// Interrupts any smooth scroll. Returns the clamped offset.
    pub fn drag_to(&mut self, offset: f64) -> f64 {
        self.tween = None;
        self.offset = self.clamp(offset);
        self.offset
    }

    /// Advances the smooth-scroll clock to `now_ms`.
    ///
    /// Returns the new offset if a smooth scroll moved the element.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        self.now_ms = self.now_ms.max(now_ms);
        let tween = self.tween?;
        self.offset = self.clamp(tween.sample(self.now_ms));
        if tween.is_done(self.now_ms) {
            self.tween = None;
        }
        Some(self.offset)
    }

    /// Jumps a running smooth scroll to its end. Returns the final offset.
    pub fn finish_smooth_scroll(&mut self) -> Option<f64> {
        let tween = self.tween.take()?;
        self.offset = self.clamp(tween.to);
        Some(self.offset)
    }

    fn clamp(&self, offset: f64) -> f64 {
        ViewportState::new(self.offset, self.content_extent, self.visible_extent)
            .clamp_offset(offset)
    }
}

impl Viewport for MemoryViewport {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn content_extent(&self) -> f64 {
        self.content_extent
    }

    fn visible_extent(&self) -> f64 {
        self.visible_extent
    }

    fn scroll_to(&mut self, command: ScrollCommand) {
        self.commands.push(command);
        let target = self.clamp(command.offset);
        match command.behavior {
            ScrollBehavior::Instant => {
                self.tween = None;
                self.offset = target;
            }
            ScrollBehavior::Smooth => {
                self.tween = Some(Tween::new(
                    self.offset,
                    target,
                    self.now_ms,
                    self.smooth_duration_ms,
                    self.easing,
                ));
            }
        }
    }
}
