// Example: drive the engine by hand (no scheduler), the way an immediate-mode UI would.
use hscroll::{Carousel, CarouselOptions, ItemLayout, StepDirection, ViewportState, WheelDelta};

fn main() {
    let mut c = Carousel::new(
        CarouselOptions::with_layout(ItemLayout::uniform(10, 336.0))
            .with_on_active_index_change(Some(|i| println!("active index -> {i}"))),
    );
    c.set_viewport_state(ViewportState::new(0.0, 3360.0, 1000.0));

    // One trackpad flick.
    if let Some(intent) = c.wheel_intent(WheelDelta::vertical(50.0)) {
        println!("intent={intent:?}");
        c.add_impulse(50.0);
    }

    let mut frame = 0u32;
    loop {
        frame += 1;
        let tick = c.advance_momentum();
        if frame % 10 == 0 {
            println!(
                "frame={frame} offset={:.1} velocity={:.2}",
                tick.offset,
                c.velocity()
            );
        }
        if tick.settled {
            break;
        }
    }

    // A UI would write this command to the real scroll container.
    println!("settled after {frame} frames at {:.1}", c.scroll_offset());
    if let Some(cmd) = c.snap() {
        println!("snap -> {cmd:?}");
        c.observe_scroll(cmd.offset);
    }

    // Keyboard stepping from there.
    for _ in 0..2 {
        if let Some(cmd) = c.step(StepDirection::Forward) {
            println!("step -> {cmd:?}");
            c.observe_scroll(cmd.offset);
        }
    }
    println!("active={}", c.active_index());
}
