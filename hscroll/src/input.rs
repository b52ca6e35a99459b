use crate::{Intent, StepDirection, ViewportState};

/// A wheel/trackpad event payload.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelDelta {
    pub delta_x: f64,
    pub delta_y: f64,
}

impl WheelDelta {
    pub fn vertical(delta_y: f64) -> Self {
        Self {
            delta_x: 0.0,
            delta_y,
        }
    }
}

/// The keys the carousel reacts to. Anything else maps to `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Normalizes a wheel event into an impulse.
///
/// Returns `None` for horizontal-dominant input and for input pointing past an edge the viewport
/// already sits on; the host should then let the page handle the event.
pub fn wheel_intent(
    wheel: WheelDelta,
    viewport: &ViewportState,
    edge_epsilon: f64,
) -> Option<Intent> {
    if wheel.delta_y.abs() <= wheel.delta_x.abs() {
        return None;
    }
    let forward = wheel.delta_y > 0.0 && viewport.can_scroll_forward(edge_epsilon);
    let backward = wheel.delta_y < 0.0 && viewport.can_scroll_backward(edge_epsilon);
    if forward || backward {
        Some(Intent::Impulse(wheel.delta_y))
    } else {
        htrace!(
            delta_y = wheel.delta_y,
            offset = viewport.scroll_offset,
            "wheel at edge, passing through"
        );
        None
    }
}

/// Normalizes a key press into a step. Keys only count while the carousel has focus.
pub fn key_intent(key: Key, has_focus: bool) -> Option<Intent> {
    if !has_focus {
        return None;
    }
    match key {
        Key::ArrowRight => Some(Intent::Step(StepDirection::Forward)),
        Key::ArrowLeft => Some(Intent::Step(StepDirection::Backward)),
        Key::Other => None,
    }
}
