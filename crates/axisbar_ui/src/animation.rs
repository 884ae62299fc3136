//! Fill transitions.
//!
//! The displayed fill ratio chases the committed one along the curve named
//! by the bar's [`TransitionSpec`]. Without a transition it snaps.

use axisbar_core::{TransitionCurve, TransitionSpec};

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Cubic ease-in.
    EaseIn,
    /// Cubic ease-out.
    #[default]
    EaseOut,
    /// Cubic ease-in-out.
    EaseInOut,
    /// No animation.
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Self::Instant => 1.0,
        }
    }
}

impl From<TransitionCurve> for Easing {
    fn from(curve: TransitionCurve) -> Self {
        match curve {
            TransitionCurve::Linear => Self::Linear,
            TransitionCurve::EaseIn => Self::EaseIn,
            TransitionCurve::EaseOut => Self::EaseOut,
            TransitionCurve::EaseInOut => Self::EaseInOut,
        }
    }
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Value when the current run started.
    start: f32,
    /// Progress of the current run (0-1).
    progress: f32,
    /// Run duration (seconds).
    duration: f32,
    /// Easing function.
    easing: Easing,
}

impl Animation {
    /// Creates an animation resting at `value`.
    #[must_use]
    pub fn new(value: f32, easing: Easing, duration: f32) -> Self {
        Self {
            current: value,
            target: value,
            start: value,
            progress: 1.0,
            duration,
            easing,
        }
    }

    /// Creates an animation that follows `transition`, or snaps when it is `None`.
    #[must_use]
    pub fn from_transition(value: f32, transition: Option<TransitionSpec>) -> Self {
        match transition {
            Some(spec) => Self::new(value, spec.curve.into(), spec.duration_secs),
            None => Self::new(value, Easing::Instant, 0.0),
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the value being animated toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true if the animation is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Sets a new target value, starting from the current value.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() <= f32::EPSILON {
            return;
        }
        if self.easing == Easing::Instant || self.duration <= 0.0 {
            self.set_immediate(target);
            return;
        }
        self.start = self.current;
        self.target = target;
        self.progress = 0.0;
    }

    /// Immediately sets the value without animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.progress = 1.0;
    }

    /// Advances the animation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.is_complete() {
            return;
        }

        self.progress = (self.progress + dt / self.duration).min(1.0);
        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        if self.is_complete() {
            self.current = self.target;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::from_transition(0.0, Some(TransitionSpec::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert!(easing.apply(0.0).abs() < f32::EPSILON, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < f32::EPSILON, "{easing:?}");
        }
        assert_eq!(Easing::Instant.apply(0.0), 1.0);
    }

    #[test]
    fn test_ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.3) > Easing::Linear.apply(0.3));
        assert!(Easing::EaseIn.apply(0.3) < Easing::Linear.apply(0.3));
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::from_transition(0.0, Some(TransitionSpec::default()));
        anim.set_target(1.0);
        assert!(!anim.is_complete());

        // 0.16s at ~60fps
        for _ in 0..12 {
            anim.update(0.016);
        }

        assert!((anim.value() - 1.0).abs() < f32::EPSILON);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_no_transition_snaps() {
        let mut anim = Animation::from_transition(0.2, None);
        anim.set_target(0.8);

        assert!(anim.is_complete());
        assert!((anim.value() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_retarget_midway_starts_from_current() {
        let mut anim = Animation::new(0.0, Easing::Linear, 1.0);
        anim.set_target(1.0);
        anim.update(0.5);
        assert!((anim.value() - 0.5).abs() < 1e-6);

        anim.set_target(0.0);
        anim.update(0.5);
        assert!((anim.value() - 0.25).abs() < 1e-6);
        assert!((anim.target()).abs() < f32::EPSILON);
    }
}
