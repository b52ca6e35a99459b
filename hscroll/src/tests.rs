use crate::*;

use std::sync::{Arc, Mutex};

fn carousel(count: usize, slot: f64, visible: f64) -> Carousel {
    let mut c = Carousel::new(CarouselOptions::with_layout(ItemLayout::uniform(count, slot)));
    c.set_viewport_state(ViewportState::new(0.0, count as f64 * slot, visible));
    c
}

fn recorder() -> (Arc<Mutex<Vec<usize>>>, impl Fn(usize) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |i| sink.lock().unwrap().push(i))
}

#[test]
fn single_wheel_impulse_coasts_and_snaps() {
    let mut c = carousel(10, 336.0, 1000.0);

    let intent = c.wheel_intent(WheelDelta::vertical(50.0));
    assert_eq!(intent, Some(Intent::Impulse(50.0)));
    let v = c.add_impulse(50.0);
    assert!((v - 60.0).abs() < 1e-9);

    let mut ticks = 0;
    let mut prev = c.velocity().abs();
    loop {
        let tick = c.advance_momentum();
        ticks += 1;
        if tick.settled {
            assert_eq!(c.velocity(), 0.0);
            break;
        }
        assert!(c.velocity().abs() < prev);
        prev = c.velocity().abs();
        assert!(ticks < 1000, "momentum must settle");
    }

    assert!((57..=58).contains(&ticks), "ticks={ticks}");
    let offset = c.scroll_offset();
    assert!(offset > 740.0 && offset < 750.0, "offset={offset}");

    let cmd = c.snap().unwrap();
    assert_eq!(cmd, ScrollCommand::smooth(672.0));
    assert_eq!(c.active_index(), 2);
}

#[test]
fn momentum_is_clamped_to_scrollable_range() {
    let mut c = carousel(10, 336.0, 1000.0);
    c.add_impulse(5_000.0);
    let tick = c.advance_momentum();
    assert_eq!(tick.offset, 2360.0);
    assert!(!tick.settled);

    c.stop_momentum();
    c.add_impulse(-100_000.0);
    assert_eq!(c.advance_momentum().offset, 0.0);
}

#[test]
fn snap_is_idempotent_on_boundaries() {
    let mut c = carousel(10, 336.0, 1000.0);
    c.observe_scroll(672.0);
    assert_eq!(c.snap(), None);
    assert_eq!(c.active_index(), 2);

    c.observe_scroll(700.0);
    assert_eq!(c.snap(), Some(ScrollCommand::smooth(672.0)));
    c.observe_scroll(672.0);
    assert_eq!(c.snap(), None);
    assert_eq!(c.snap(), None);
}

#[test]
fn steps_clamp_at_both_ends() {
    let mut c = carousel(10, 336.0, 336.0);
    assert_eq!(c.step(StepDirection::Backward), None);
    assert_eq!(c.active_index(), 0);

    c.observe_scroll(9.0 * 336.0);
    assert_eq!(c.snap(), None);
    assert_eq!(c.active_index(), 9);

    assert_eq!(c.step(StepDirection::Forward), None);
    assert_eq!(c.active_index(), 9);
}

#[test]
fn rapid_steps_build_on_the_pending_target() {
    let mut c = carousel(10, 336.0, 1000.0);
    let cmds: Vec<_> = (0..3)
        .filter_map(|_| c.step(StepDirection::Forward))
        .collect();
    assert_eq!(
        cmds,
        vec![
            ScrollCommand::smooth(336.0),
            ScrollCommand::smooth(672.0),
            ScrollCommand::smooth(1008.0),
        ]
    );
    assert_eq!(c.active_index(), 3);

    c.observe_scroll(500.0);
    c.observe_scroll(1008.0);
    assert!(c.anchor().unwrap().arrived);
    assert_eq!(c.snap(), None);
    assert_eq!(c.active_index(), 3);
}

#[test]
fn jump_stops_momentum_and_clamps_index() {
    let mut c = carousel(10, 336.0, 1000.0);
    c.add_impulse(40.0);
    c.advance_momentum();
    c.advance_momentum();
    assert!(c.velocity() > 0.0);

    assert_eq!(c.jump(5), Some(ScrollCommand::smooth(1680.0)));
    assert_eq!(c.velocity(), 0.0);

    // Past the end: clamps to the last item, whose offset clamps to the scroll range.
    assert_eq!(c.jump(99), Some(ScrollCommand::smooth(2360.0)));
    assert_eq!(c.active_index(), 9);
    assert_eq!(c.jump(9), None);
}

#[test]
fn last_items_sharing_an_offset_are_still_reachable() {
    let mut c = carousel(10, 336.0, 1000.0);
    assert_eq!(c.jump(7), Some(ScrollCommand::smooth(2352.0)));
    c.observe_scroll(2352.0);

    assert_eq!(
        c.step(StepDirection::Forward),
        Some(ScrollCommand::smooth(2360.0))
    );
    assert_eq!(c.step(StepDirection::Forward), None);
    assert_eq!(c.active_index(), 9);

    assert_eq!(c.step(StepDirection::Backward), None);
    assert_eq!(c.active_index(), 8);
    assert_eq!(
        c.step(StepDirection::Backward),
        Some(ScrollCommand::smooth(2352.0))
    );
}

#[test]
fn impulse_drops_anchor() {
    let mut c = carousel(10, 336.0, 1000.0);
    c.jump(4);
    assert!(c.anchor().is_some());
    c.add_impulse(10.0);
    assert_eq!(c.anchor(), None);
}

#[test]
fn user_drag_releases_arrived_anchor() {
    let mut c = carousel(10, 336.0, 1000.0);
    c.step(StepDirection::Forward);
    c.observe_scroll(336.0);
    assert!(c.anchor().unwrap().arrived);

    c.observe_scroll(500.0);
    assert_eq!(c.anchor(), None);
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.snap(), Some(ScrollCommand::smooth(336.0)));
}

#[test]
fn interrupted_smooth_scroll_is_abandoned_on_snap() {
    let mut c = carousel(10, 336.0, 1000.0);
    c.jump(3);
    c.observe_scroll(100.0);
    assert!(!c.anchor().unwrap().arrived);

    assert_eq!(c.snap(), Some(ScrollCommand::smooth(0.0)));
    assert_eq!(c.anchor().unwrap().index, 0);
    assert_eq!(c.active_index(), 0);
}

#[test]
fn active_index_callback_fires_once_per_change() {
    let (seen, sink) = recorder();
    let opts = CarouselOptions::with_layout(ItemLayout::uniform(10, 336.0))
        .with_on_active_index_change(Some(sink));
    let mut c = Carousel::new(opts);
    c.set_viewport_state(ViewportState::new(0.0, 3360.0, 1000.0));

    c.jump(3);
    c.jump(3);
    c.observe_scroll(1008.0);
    c.snap();
    c.jump(0);

    assert_eq!(*seen.lock().unwrap(), vec![3, 0]);
}

#[test]
fn breakpoint_selects_slot_width() {
    let opts = CarouselOptions::new(10).with_initial_window_width(1024.0);
    let mut c = Carousel::new(opts);
    c.set_viewport_state(ViewportState::new(0.0, 3440.0, 1024.0));
    assert_eq!(c.slot_width(), 344.0);

    c.jump(2);
    assert!(c.set_window_width(500.0));
    assert_eq!(c.slot_width(), 296.0);
    assert_eq!(c.anchor(), None);
    assert!(!c.set_window_width(600.0));
    assert!(c.set_window_width(768.0));
    assert_eq!(c.slot_width(), 344.0);
}

#[test]
fn empty_carousel_is_inert() {
    let mut c = carousel(0, 336.0, 1000.0);
    assert_eq!(c.step(StepDirection::Forward), None);
    assert_eq!(c.jump(3), None);
    assert_eq!(c.snap(), None);
    assert_eq!(c.active_index(), 0);
}

#[test]
fn invalid_tuning_is_sanitized() {
    let opts = CarouselOptions::new(4)
        .with_friction(1.5)
        .with_wheel_multiplier(f64::NAN)
        .with_min_velocity(-1.0);
    assert_eq!(opts.validate(), Err(ConfigError::InvalidFriction(1.5)));

    let c = Carousel::new(opts);
    assert_eq!(c.tuning().friction, Tuning::DEFAULT_FRICTION);
    assert_eq!(c.tuning().wheel_multiplier, Tuning::DEFAULT_WHEEL_MULTIPLIER);
    assert_eq!(c.tuning().min_velocity, Tuning::DEFAULT_MIN_VELOCITY);
}

#[test]
fn zero_min_velocity_is_rejected_and_momentum_still_settles() {
    let opts = CarouselOptions::with_layout(ItemLayout::uniform(10, 336.0)).with_min_velocity(0.0);
    assert_eq!(opts.validate(), Err(ConfigError::InvalidMinVelocity(0.0)));

    let mut c = Carousel::new(opts);
    assert_eq!(c.tuning().min_velocity, Tuning::DEFAULT_MIN_VELOCITY);
    c.set_viewport_state(ViewportState::new(0.0, 3360.0, 1000.0));
    c.add_impulse(50.0);

    let mut ticks = 0;
    while !c.advance_momentum().settled {
        ticks += 1;
        assert!(ticks < 1000, "momentum must settle");
    }
    assert_eq!(c.velocity(), 0.0);
}

#[test]
fn reset_forgets_anchor_and_velocity() {
    let mut c = carousel(10, 336.0, 1000.0);
    c.jump(5);
    c.observe_scroll(800.0);
    assert_eq!(c.active_index(), 5);

    c.reset();
    assert_eq!(c.anchor(), None);
    assert_eq!(c.velocity(), 0.0);

    c.set_viewport_state(ViewportState::new(0.0, 3360.0, 1000.0));
    c.sync_active_index();
    assert_eq!(c.active_index(), 0);
    assert_eq!(
        c.step(StepDirection::Forward),
        Some(ScrollCommand::smooth(336.0))
    );
}

#[test]
fn options_validation() {
    assert_eq!(CarouselOptions::new(4).validate(), Ok(()));
    assert_eq!(
        CarouselOptions::with_layout(ItemLayout::uniform(4, 0.0)).validate(),
        Err(ConfigError::InvalidSlotWidth(0.0))
    );
    assert_eq!(
        CarouselOptions::new(4)
            .with_scroll_end_delay_ms(0)
            .validate(),
        Err(ConfigError::InvalidDebounce)
    );
    assert_eq!(
        CarouselOptions::new(4).with_wheel_multiplier(0.0).validate(),
        Err(ConfigError::InvalidMultiplier(0.0))
    );
}

#[cfg(feature = "serde")]
#[test]
fn partial_config_fills_defaults() {
    let tuning: Tuning = serde_json::from_str(r#"{ "friction": 0.9 }"#).unwrap();
    assert_eq!(tuning.friction, 0.9);
    assert_eq!(tuning.wheel_multiplier, Tuning::DEFAULT_WHEEL_MULTIPLIER);

    let layout: ItemLayout = serde_json::from_str(r#"{ "count": 10 }"#).unwrap();
    assert_eq!(layout, ItemLayout::new(10));
}
