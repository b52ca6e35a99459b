use hscroll::{CarouselOptions, Key, WheelDelta};
use hscroll_adapter::{Controller, Easing, ManualScheduler, MemoryViewport, Viewport};

fn main() {
    // Example: a headless host loop around the controller.
    //
    // A real adapter would:
    // - forward wheel/key/scroll events from its widget
    // - call on_frame(task) from its animation callback and on_timeout(task) from its timer
    // - preventDefault when an event comes back Consumed
    let opts = CarouselOptions::new(10)
        .with_initial_window_width(1280.0)
        .with_on_active_index_change(Some(|i| println!("  active index -> {i}")));
    let mut c = Controller::new(opts, ManualScheduler::new());
    c.mount(MemoryViewport::new(3440.0, 1200.0).with_smooth_scroll(240, Easing::EaseInOut));

    println!("wheel flick");
    for _ in 0..3 {
        let outcome = c.on_wheel(WheelDelta::vertical(40.0));
        println!("  wheel -> {outcome:?} velocity={:.1}", c.velocity());
    }
    let frames = c.run_until_idle(10_000);
    println!("  coasted {frames} frames");
    settle(&mut c);

    println!("arrow keys");
    c.on_key_down(Key::ArrowRight, true);
    c.on_key_down(Key::ArrowRight, true);
    settle(&mut c);

    println!("indicator click");
    c.scroll_to_index(0);
    settle(&mut c);

    println!(
        "done: offset={:.1} active={}",
        c.viewport().map(|v| v.scroll_offset()).unwrap_or_default(),
        c.active_index()
    );
}

/// Plays back the element's smooth scroll at 60fps, reporting scroll events, then lets the
/// scroll-end debounce fire.
fn settle(c: &mut Controller<MemoryViewport, ManualScheduler>) {
    let mut now_ms = c.scheduler().now_ms();
    loop {
        now_ms += 16;
        let moved = c.viewport_mut().and_then(|v| v.tick(now_ms));
        if moved.is_none() {
            break;
        }
        c.on_scroll();
        c.advance_time(16);
    }
    c.advance_time(c.carousel().options().scroll_end_delay_ms);
    println!(
        "  settled at {:.1}",
        c.viewport().map(|v| v.scroll_offset()).unwrap_or_default()
    );
}
