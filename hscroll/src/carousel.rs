use crate::input::{self, Key, WheelDelta};
use crate::{
    Anchor, CarouselOptions, Intent, ItemLayout, Momentum, MomentumPhase, MomentumTick,
    ScrollCommand, ScrollState, StepDirection, Tuning, ViewportState,
};

/// A headless horizontal momentum-scroll engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or timers.
/// - Your adapter feeds it viewport geometry and scroll observations, and writes the returned
///   [`ScrollCommand`]s to the real scroll container.
/// - Momentum is advanced one tick at a time via [`Carousel::advance_momentum`]; scheduling the
///   ticks is the adapter's job.
///
/// For a scheduler-driven controller with cancellable frame/timer handles, see the
/// `hscroll-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    tuning: Tuning,
    viewport: ViewportState,
    window_width: f64,
    slot_width: f64,
    momentum: Momentum,
    anchor: Option<Anchor>,
    active_index: usize,
}

impl Carousel {
    pub fn new(options: CarouselOptions) -> Self {
        let tuning = options.tuning.sanitized();
        let window_width = options.initial_window_width;
        let slot_width = options.layout.slot_width(window_width);
        hdebug!(
            count = options.layout.count,
            slot_width,
            window_width,
            "Carousel::new"
        );
        if !(slot_width.is_finite() && slot_width > 0.0) {
            hwarn!(slot_width, "Carousel::new: slot width must be positive");
        }
        Self {
            momentum: Momentum::new(&tuning),
            tuning,
            viewport: ViewportState::default(),
            window_width,
            slot_width,
            anchor: None,
            active_index: 0,
            options,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn layout(&self) -> &ItemLayout {
        &self.options.layout
    }

    /// The sanitized tuning the engine actually runs on.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn count(&self) -> usize {
        self.options.layout.count
    }

    pub fn window_width(&self) -> f64 {
        self.window_width
    }

    pub fn slot_width(&self) -> f64 {
        self.slot_width
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.viewport
    }

    pub fn scroll_offset(&self) -> f64 {
        self.viewport.scroll_offset
    }

    pub fn velocity(&self) -> f64 {
        self.momentum.velocity()
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    /// The last published active index.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn scroll_state(&self, phase: MomentumPhase) -> ScrollState {
        ScrollState {
            viewport: self.viewport,
            velocity: self.momentum.velocity(),
            active_index: self.active_index,
            phase,
        }
    }

    /// Replaces the viewport geometry with what the host currently renders.
    ///
    /// This does not touch the anchor; use [`Carousel::observe_scroll`] for scroll events.
    pub fn set_viewport_state(&mut self, viewport: ViewportState) {
        self.viewport = viewport;
    }

    /// Re-evaluates the slot breakpoint.
    ///
    /// Returns `true` when the slot width changed; the anchor is then dropped (its offset is
    /// stale) and the active index re-derived.
    pub fn set_window_width(&mut self, window_width: f64) -> bool {
        self.window_width = window_width;
        let slot_width = self.options.layout.slot_width(window_width);
        if slot_width == self.slot_width {
            return false;
        }
        hdebug!(
            window_width,
            from = self.slot_width,
            to = slot_width,
            "slot width changed"
        );
        self.slot_width = slot_width;
        self.anchor = None;
        self.sync_active_index();
        true
    }

    /// Start offset of `index`, clamped to the scrollable range.
    pub fn target_offset(&self, index: usize) -> f64 {
        let raw = self.options.layout.item_offset(index, self.slot_width);
        self.viewport.clamp_offset(raw)
    }

    pub fn nearest_index(&self, offset: f64) -> usize {
        self.options.layout.nearest_index(offset, self.slot_width)
    }

    /// The index navigation is relative to: the anchor's index while one exists, otherwise the
    /// item nearest to the current offset.
    pub fn current_index(&self) -> usize {
        match self.anchor {
            Some(anchor) => anchor.index,
            None => self.nearest_index(self.viewport.scroll_offset),
        }
    }

    pub fn wheel_intent(&self, wheel: WheelDelta) -> Option<Intent> {
        input::wheel_intent(wheel, &self.viewport, self.tuning.edge_epsilon)
    }

    pub fn key_intent(&self, key: Key, has_focus: bool) -> Option<Intent> {
        input::key_intent(key, has_focus)
    }

    /// Records a scroll position reported by the host.
    ///
    /// An in-flight anchor is marked as arrived once the offset reaches it; an arrived anchor is
    /// dropped as soon as the offset moves away (the user took over).
    pub fn observe_scroll(&mut self, offset: f64) {
        self.viewport.scroll_offset = offset;
        let Some(anchor) = self.anchor else {
            return;
        };
        let near = (offset - anchor.offset).abs() <= self.tuning.snap_epsilon;
        if !anchor.arrived && near {
            htrace!(index = anchor.index, offset, "anchor reached");
            self.anchor = Some(Anchor {
                arrived: true,
                ..anchor
            });
        } else if anchor.arrived && !near {
            htrace!(index = anchor.index, offset, "left anchor");
            self.anchor = None;
        }
    }

    /// Adds a wheel impulse and returns the new velocity.
    ///
    /// Momentum takes ownership of the offset, so any anchor is dropped.
    pub fn add_impulse(&mut self, delta: f64) -> f64 {
        self.anchor = None;
        let velocity = self.momentum.impulse(delta);
        htrace!(delta, velocity, "impulse");
        velocity
    }

    /// Runs one momentum tick: offset += velocity (clamped), velocity *= friction.
    pub fn advance_momentum(&mut self) -> MomentumTick {
        let step = self.momentum.advance();
        let offset = self
            .viewport
            .clamp_offset(self.viewport.scroll_offset + step.delta);
        self.viewport.scroll_offset = offset;
        if step.settled {
            hdebug!(offset, "momentum settled");
        }
        MomentumTick {
            offset,
            settled: step.settled,
        }
    }

    /// Forgets everything tied to the current element: the velocity and the anchor.
    ///
    /// Options, the window width and the last published index are kept; the next
    /// [`Carousel::sync_active_index`] re-derives the index from whatever offset is observed.
    pub fn reset(&mut self) {
        self.momentum.reset();
        self.anchor = None;
        self.viewport = ViewportState::default();
        hdebug!("reset");
    }

    /// Zeroes the velocity. Returns `true` if there was momentum to stop.
    pub fn stop_momentum(&mut self) -> bool {
        let was_moving = self.momentum.is_moving();
        self.momentum.reset();
        was_moving
    }

    /// Moves one item from [`Carousel::current_index`], clamped at both ends.
    ///
    /// Always stops momentum. Returns `None` when there is nothing to scroll (already at the
    /// clamped target).
    pub fn step(&mut self, direction: StepDirection) -> Option<ScrollCommand> {
        self.stop_momentum();
        if self.options.layout.is_empty() {
            return None;
        }
        let base = self.current_index();
        let index = match direction {
            StepDirection::Forward => self.options.layout.clamp_index(base.saturating_add(1)),
            StepDirection::Backward => base.saturating_sub(1),
        };
        self.navigate_to(index)
    }

    /// Moves to `index`, clamped to the valid range. Always stops momentum.
    pub fn jump(&mut self, index: usize) -> Option<ScrollCommand> {
        self.stop_momentum();
        if self.options.layout.is_empty() {
            return None;
        }
        let index = self.options.layout.clamp_index(index);
        self.navigate_to(index)
    }

    fn navigate_to(&mut self, index: usize) -> Option<ScrollCommand> {
        let eps = self.tuning.snap_epsilon;
        let target = self.target_offset(index);

        let current = self.anchor;
        let command = match current {
            Some(anchor) if anchor.index == index => None,
            // Different index, same clamped offset (e.g. the last items near the end).
            Some(anchor) if (anchor.offset - target).abs() <= eps => {
                self.anchor = Some(Anchor { index, ..anchor });
                None
            }
            None if (self.viewport.scroll_offset - target).abs() <= eps => {
                self.anchor = Some(Anchor {
                    index,
                    offset: target,
                    arrived: true,
                });
                None
            }
            _ => {
                self.anchor = Some(Anchor {
                    index,
                    offset: target,
                    arrived: false,
                });
                Some(ScrollCommand::smooth(target))
            }
        };
        hdebug!(index, target, issued = command.is_some(), "navigate");
        self.sync_active_index();
        command
    }

    /// Aligns the viewport to the nearest item boundary.
    ///
    /// Called when momentum settles and when a scroll-end quiet period elapses. Idempotent: an
    /// offset already on a boundary (or on the anchor) yields no command.
    pub fn snap(&mut self) -> Option<ScrollCommand> {
        if self.options.layout.is_empty() {
            return None;
        }
        let eps = self.tuning.snap_epsilon;
        let offset = self.viewport.scroll_offset;

        let current = self.anchor;
        if let Some(anchor) = current {
            if anchor.arrived || (offset - anchor.offset).abs() <= eps {
                self.anchor = Some(Anchor {
                    arrived: true,
                    ..anchor
                });
                self.sync_active_index();
                return None;
            }
            // Quiet before reaching the target: the smooth scroll was interrupted.
            hdebug!(
                index = anchor.index,
                target = anchor.offset,
                offset,
                "anchor abandoned"
            );
            self.anchor = None;
        }

        let index = self.nearest_index(offset);
        let target = self.target_offset(index);
        if (target - offset).abs() <= eps {
            self.sync_active_index();
            return None;
        }
        htrace!(index, offset, target, "snap");
        self.anchor = Some(Anchor {
            index,
            offset: target,
            arrived: false,
        });
        self.sync_active_index();
        Some(ScrollCommand::smooth(target))
    }

    /// Re-derives the active index and publishes it if it changed.
    pub fn sync_active_index(&mut self) {
        let next = self.current_index();
        if next == self.active_index {
            return;
        }
        hdebug!(from = self.active_index, to = next, "active index");
        self.active_index = next;
        if let Some(cb) = &self.options.on_active_index_change {
            cb(next);
        }
    }
}
