/// A fixed-duration eased interpolation between two scroll offsets.
///
/// [`crate::MemoryViewport`] plays `Smooth` scroll commands through one of these, the way a
/// browser animates `scrollTo({ behavior: "smooth" })`. A new command replaces the running tween,
/// starting from wherever the element currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// Linear time progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// The eased offset at `now_ms`. Exactly `to` once done.
    pub fn sample(&self, now_ms: u64) -> f64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }
}

/// Timing curves for simulated smooth scrolls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, gentle landing.
    EaseOut,
    /// Cubic ease-in-out, close to what browsers use for smooth scrolling.
    #[default]
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_both_ends() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    }

    #[test]
    fn sample_lands_exactly_on_target() {
        let t = Tween::new(336.0, 672.0, 1_000, 300, Easing::EaseInOut);
        assert_eq!(t.sample(900), 336.0);
        assert!(t.sample(1_150) > 336.0 && t.sample(1_150) < 672.0);
        assert_eq!(t.sample(1_300), 672.0);
        assert!(t.is_done(1_300));
    }

    #[test]
    fn zero_duration_is_clamped() {
        let t = Tween::new(0.0, 10.0, 0, 0, Easing::Linear);
        assert_eq!(t.duration_ms, 1);
        assert_eq!(t.sample(1), 10.0);
    }
}
