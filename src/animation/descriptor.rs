//! Declarative animation descriptors and the two indicator effects.

use std::time::Duration;

/// Length of one leg of either effect.
pub const EFFECT_DURATION: Duration = Duration::from_millis(500);

/// Opacity the fade effect starts from.
pub const FADE_FROM: f32 = 1.0;

/// Opacity the fade effect reaches at the end of a forward leg.
pub const FADE_TO: f32 = 0.5;

/// Layer property an animation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedProperty {
    /// Vertical offset from the layer's laid-out position.
    TranslationY,
    /// Layer opacity.
    Opacity,
}

/// Start and end values of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationValues {
    /// Animate from the property's current value by a delta.
    By(f32),
    /// Animate between two absolute values.
    FromTo(f32, f32),
}

/// A declarative animation: what to animate, between which values, and how
/// it repeats. Sampling is linear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDescriptor {
    /// Property being driven.
    pub property: AnimatedProperty,
    /// Values for the forward leg.
    pub values: AnimationValues,
    /// Duration of the forward leg.
    pub duration: Duration,
    /// Repeat until removed.
    pub repeat_forever: bool,
    /// Play each forward leg back in reverse before repeating.
    pub autoreverses: bool,
}

impl AnimationDescriptor {
    /// Length of one full cycle, including the reverse leg.
    pub fn cycle(&self) -> Duration {
        if self.autoreverses {
            self.duration * 2
        } else {
            self.duration
        }
    }

    /// Whether a non-repeating animation has played out after `elapsed`.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        !self.repeat_forever && elapsed >= self.cycle()
    }

    /// Progress through the forward leg in `0.0..=1.0` after `elapsed`.
    ///
    /// Auto-reversing animations walk back down during the reverse leg.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let leg = self.duration.as_secs_f64();
        let cycle = self.cycle().as_secs_f64();
        let t = elapsed.as_secs_f64();
        if self.is_finished(elapsed) {
            return 0.0;
        }

        let phase = t % cycle;
        #[allow(clippy::cast_possible_truncation)]
        let p = if phase <= leg {
            (phase / leg) as f32
        } else {
            ((cycle - phase) / leg) as f32
        };
        p.clamp(0.0, 1.0)
    }

    /// Sample the animated value after `elapsed`, given the property's model
    /// value `base`. A finished animation yields `base`.
    pub fn sample(&self, base: f32, elapsed: Duration) -> f32 {
        if self.is_finished(elapsed) {
            return base;
        }
        let (from, to) = match self.values {
            AnimationValues::By(delta) => (base, base + delta),
            AnimationValues::FromTo(from, to) => (from, to),
        };
        (to - from).mul_add(self.progress(elapsed), from)
    }
}

/// The two effects a typing indicator can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EffectKind {
    /// Repeating vertical bounce.
    Bounce,
    /// Repeating opacity fade.
    Fade,
}

impl EffectKind {
    /// Both effects, bounce first.
    pub const ALL: [Self; 2] = [Self::Bounce, Self::Fade];

    /// Layer key the effect is attached under.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bounce => "bounce",
            Self::Fade => "opacity",
        }
    }

    /// Effect attached under `key`, if any.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// Bounce: move up by `offset` and back, forever.
pub fn bounce(offset: f32) -> AnimationDescriptor {
    AnimationDescriptor {
        property: AnimatedProperty::TranslationY,
        values: AnimationValues::By(-offset),
        duration: EFFECT_DURATION,
        repeat_forever: true,
        autoreverses: true,
    }
}

/// Fade: opacity 1.0 down to 0.5 and back, forever.
pub fn fade() -> AnimationDescriptor {
    AnimationDescriptor {
        property: AnimatedProperty::Opacity,
        values: AnimationValues::FromTo(FADE_FROM, FADE_TO),
        duration: EFFECT_DURATION,
        repeat_forever: true,
        autoreverses: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_bounce_descriptor() {
        let d = bounce(7.5);
        assert_eq!(d.property, AnimatedProperty::TranslationY);
        assert_eq!(d.values, AnimationValues::By(-7.5));
        assert_eq!(d.duration, Duration::from_millis(500));
        assert!(d.repeat_forever);
        assert!(d.autoreverses);
    }

    #[test]
    fn test_fade_descriptor() {
        let d = fade();
        assert_eq!(d.property, AnimatedProperty::Opacity);
        assert_eq!(d.values, AnimationValues::FromTo(1.0, 0.5));
        assert!(d.repeat_forever && d.autoreverses);
    }

    #[test]
    fn test_bounce_oscillates() {
        let d = bounce(8.0);
        assert!(approx(d.sample(0.0, Duration::ZERO), 0.0));
        assert!(approx(d.sample(0.0, Duration::from_millis(250)), -4.0));
        assert!(approx(d.sample(0.0, Duration::from_millis(500)), -8.0));
        assert!(approx(d.sample(0.0, Duration::from_millis(750)), -4.0));
        // Next cycle starts over
        assert!(approx(d.sample(0.0, Duration::from_millis(1250)), -4.0));
        assert!(approx(d.sample(0.0, Duration::from_secs(10)), 0.0));
    }

    #[test]
    fn test_fade_oscillates() {
        let d = fade();
        assert!(approx(d.sample(1.0, Duration::ZERO), 1.0));
        assert!(approx(d.sample(1.0, Duration::from_millis(500)), 0.5));
        assert!(approx(d.sample(1.0, Duration::from_millis(1000)), 1.0));
    }

    #[test]
    fn test_non_repeating_finishes_at_base() {
        let mut d = fade();
        d.repeat_forever = false;
        assert!(!d.is_finished(Duration::from_millis(999)));
        assert!(d.is_finished(Duration::from_millis(1000)));
        assert!(approx(d.sample(0.8, Duration::from_secs(2)), 0.8));
    }

    #[test]
    fn test_effect_keys() {
        assert_eq!(EffectKind::Bounce.key(), "bounce");
        assert_eq!(EffectKind::Fade.key(), "opacity");
        assert_eq!(EffectKind::from_key("opacity"), Some(EffectKind::Fade));
        assert_eq!(EffectKind::from_key("position"), None);
    }
}
