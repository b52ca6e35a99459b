/// Direction of a discrete one-item step.
///
/// `Backward` moves toward index 0 (ArrowLeft), `Forward` toward the last item (ArrowRight).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepDirection {
    Backward,
    Forward,
}

/// A normalized scroll intent.
///
/// Every input source (wheel, keyboard, indicator click) is reduced to one of these before it
/// touches controller state.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// A raw vertical wheel delta to be amplified and added to the velocity.
    Impulse(f64),
    /// Move exactly one item.
    Step(StepDirection),
    /// Move to an arbitrary item (clamped to the valid range).
    Jump(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// A write to the host viewport's horizontal scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub offset: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollCommand {
    pub fn instant(offset: f64) -> Self {
        Self {
            offset,
            behavior: ScrollBehavior::Instant,
        }
    }

    pub fn smooth(offset: f64) -> Self {
        Self {
            offset,
            behavior: ScrollBehavior::Smooth,
        }
    }
}

/// Momentum animation phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MomentumPhase {
    #[default]
    Idle,
    Animating,
}

/// The target of the last smooth scroll issued by the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub index: usize,
    /// Target offset, already clamped to the scrollable range.
    pub offset: f64,
    /// Whether a scroll observation has reached `offset`.
    pub arrived: bool,
}

/// Result of a single momentum tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumTick {
    /// The (clamped) offset to write to the viewport.
    pub offset: f64,
    /// `true` when the velocity dropped to the floor and was forced to zero.
    pub settled: bool,
}
