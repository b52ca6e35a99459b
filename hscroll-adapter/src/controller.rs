use hscroll::{
    Carousel, CarouselOptions, Intent, Key, MomentumPhase, ScrollCommand, ScrollState, WheelDelta,
};

use crate::{ManualScheduler, Scheduler, TaskId, Viewport};

/// Whether the host should suppress the input event's default action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// Let the event through (e.g. the page scrolls vertically).
    Ignored,
    /// The carousel handled it; call `preventDefault` or equivalent.
    Consumed,
}

impl EventOutcome {
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}

/// A framework-neutral controller for one mounted carousel.
///
/// It owns a [`Carousel`] engine, the host [`Viewport`] while mounted, and at most one pending
/// frame handle (momentum) plus at most one pending timeout handle (scroll-end snap). Adapters
/// drive it by calling:
/// - `on_wheel` / `on_key_down` / `scroll_to_index` for input
/// - `on_scroll` whenever the element reports a scroll
/// - `on_frame(task)` / `on_timeout(task)` when a scheduled task comes due
/// - `on_resize` when the window width changes
///
/// A step or jump always cancels running momentum and any pending snap before it writes its own
/// smooth scroll, so at most one writer owns the offset at a time. Unmounting (or dropping the
/// controller) cancels both handles.
#[derive(Debug)]
pub struct Controller<V: Viewport, S: Scheduler> {
    carousel: Carousel,
    viewport: Option<V>,
    scheduler: S,
    frame: Option<TaskId>,
    scroll_end: Option<TaskId>,
}

impl<V: Viewport, S: Scheduler> Controller<V, S> {
    pub fn new(options: CarouselOptions, scheduler: S) -> Self {
        Self::from_carousel(Carousel::new(options), scheduler)
    }

    pub fn from_carousel(carousel: Carousel, scheduler: S) -> Self {
        Self {
            carousel,
            viewport: None,
            scheduler,
            frame: None,
            scroll_end: None,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The mounted element, if any.
    pub fn viewport(&self) -> Option<&V> {
        self.viewport.as_ref()
    }

    pub fn viewport_mut(&mut self) -> Option<&mut V> {
        self.viewport.as_mut()
    }

    pub fn is_mounted(&self) -> bool {
        self.viewport.is_some()
    }

    pub fn phase(&self) -> MomentumPhase {
        if self.frame.is_some() {
            MomentumPhase::Animating
        } else {
            MomentumPhase::Idle
        }
    }

    pub fn is_animating(&self) -> bool {
        self.frame.is_some()
    }

    pub fn is_snap_pending(&self) -> bool {
        self.scroll_end.is_some()
    }

    pub fn active_index(&self) -> usize {
        self.carousel.active_index()
    }

    pub fn velocity(&self) -> f64 {
        self.carousel.velocity()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.carousel.scroll_state(self.phase())
    }

    /// Attaches the element. A previously mounted element is unmounted first.
    pub fn mount(&mut self, viewport: V) {
        if self.viewport.is_some() {
            self.unmount();
        }
        if self.carousel.options().scroll_end_delay_ms == 0 {
            hwarn!("mount: scroll_end_delay_ms is 0, snapping 1ms after the last scroll");
        }
        self.viewport = Some(viewport);
        self.refresh();
        self.carousel.sync_active_index();
        hdebug!(
            offset = self.carousel.scroll_offset(),
            active_index = self.carousel.active_index(),
            "mount"
        );
    }

    /// Detaches the element, cancelling any scheduled frame and pending snap.
    ///
    /// Engine state tied to the element (velocity, smooth-scroll anchor) is dropped, so a later
    /// `mount` starts from the new element's offset.
    pub fn unmount(&mut self) -> Option<V> {
        self.cancel_momentum();
        self.cancel_scroll_end();
        self.carousel.reset();
        let viewport = self.viewport.take();
        if viewport.is_some() {
            hdebug!("unmount");
        }
        viewport
    }

    pub fn on_resize(&mut self, window_width: f64) {
        self.refresh();
        self.carousel.set_window_width(window_width);
    }

    pub fn on_wheel(&mut self, wheel: WheelDelta) -> EventOutcome {
        if !self.refresh() {
            return EventOutcome::Ignored;
        }
        match self.carousel.wheel_intent(wheel) {
            Some(intent) => self.dispatch(intent),
            None => EventOutcome::Ignored,
        }
    }

    /// Arrow keys step while the carousel has focus; the event is consumed even when the step
    /// clamps to a no-op.
    pub fn on_key_down(&mut self, key: Key, has_focus: bool) -> EventOutcome {
        if !self.is_mounted() {
            return EventOutcome::Ignored;
        }
        match self.carousel.key_intent(key, has_focus) {
            Some(intent) => self.dispatch(intent),
            None => EventOutcome::Ignored,
        }
    }

    /// Smooth-scrolls to `index` (clamped). Entry point for indicator dots.
    pub fn scroll_to_index(&mut self, index: usize) -> EventOutcome {
        self.dispatch(Intent::Jump(index))
    }

    /// The single consumer of normalized intents.
    pub fn dispatch(&mut self, intent: Intent) -> EventOutcome {
        if !self.refresh() {
            return EventOutcome::Ignored;
        }
        match intent {
            Intent::Impulse(delta) => {
                // Momentum owns the offset from here until it settles.
                self.cancel_scroll_end();
                self.carousel.add_impulse(delta);
                if self.frame.is_none() {
                    self.frame = Some(self.scheduler.request_frame());
                    htrace!(velocity = self.carousel.velocity(), "momentum start");
                }
            }
            Intent::Step(direction) => {
                self.cancel_momentum();
                self.cancel_scroll_end();
                let command = self.carousel.step(direction);
                self.issue(command);
            }
            Intent::Jump(index) => {
                self.cancel_momentum();
                self.cancel_scroll_end();
                let command = self.carousel.jump(index);
                self.issue(command);
            }
        }
        EventOutcome::Consumed
    }

    /// Runs one momentum tick. Callbacks for handles the controller no longer holds are ignored.
    pub fn on_frame(&mut self, task: TaskId) {
        if self.frame != Some(task) {
            htrace!(task = task.0, "stale frame");
            return;
        }
        self.frame = None;
        let Some(viewport) = self.viewport.as_mut() else {
            return;
        };

        self.carousel.set_viewport_state(viewport.state());
        let tick = self.carousel.advance_momentum();
        viewport.scroll_to(ScrollCommand::instant(tick.offset));
        self.carousel.set_viewport_state(viewport.state());

        if !tick.settled {
            self.frame = Some(self.scheduler.request_frame());
            return;
        }
        let command = self.carousel.snap();
        self.issue(command);
    }

    /// Records a scroll event from the element and (re)arms the scroll-end debounce.
    ///
    /// While momentum is animating the tick loop owns the offset and no snap is armed.
    pub fn on_scroll(&mut self) {
        if !self.refresh() {
            return;
        }
        if self.frame.is_some() {
            return;
        }
        self.cancel_scroll_end();
        let delay_ms = self.carousel.options().scroll_end_delay_ms.max(1);
        self.scroll_end = Some(self.scheduler.set_timeout(delay_ms));
    }

    /// Scroll-end: the debounce window elapsed without further scroll events.
    pub fn on_timeout(&mut self, task: TaskId) {
        if self.scroll_end != Some(task) {
            htrace!(task = task.0, "stale timeout");
            return;
        }
        self.scroll_end = None;
        if self.frame.is_some() || !self.refresh() {
            return;
        }
        let command = self.carousel.snap();
        self.issue(command);
    }

    fn cancel_momentum(&mut self) {
        if let Some(task) = self.frame.take() {
            self.scheduler.cancel(task);
            htrace!(task = task.0, "momentum cancelled");
        }
        self.carousel.stop_momentum();
    }

    fn cancel_scroll_end(&mut self) {
        if let Some(task) = self.scroll_end.take() {
            self.scheduler.cancel(task);
        }
    }

    /// Pulls the element's current geometry into the engine. Returns `false` when unmounted.
    fn refresh(&mut self) -> bool {
        let Some(viewport) = self.viewport.as_ref() else {
            return false;
        };
        let state = viewport.state();
        self.carousel.set_viewport_state(state);
        self.carousel.observe_scroll(state.scroll_offset);
        true
    }

    fn issue(&mut self, command: Option<ScrollCommand>) {
        let (Some(command), Some(viewport)) = (command, self.viewport.as_mut()) else {
            return;
        };
        htrace!(offset = command.offset, "scroll_to");
        viewport.scroll_to(command);
    }
}

impl<V: Viewport, S: Scheduler> Drop for Controller<V, S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl<V: Viewport> Controller<V, ManualScheduler> {
    /// Delivers the oldest pending frame. Returns `false` when none is pending.
    pub fn pump_frame(&mut self) -> bool {
        let Some(task) = self.scheduler.take_frame() else {
            return false;
        };
        self.on_frame(task);
        true
    }

    /// Pumps frames until momentum settles or `max_frames` is reached. Returns the frame count.
    pub fn run_until_idle(&mut self, max_frames: usize) -> usize {
        let mut frames = 0;
        while frames < max_frames && self.pump_frame() {
            frames += 1;
        }
        frames
    }

    /// Advances the scheduler clock and delivers the timeouts that came due.
    pub fn advance_time(&mut self, ms: u64) {
        for task in self.scheduler.advance(ms) {
            self.on_timeout(task);
        }
    }
}
