//! Easing curves for UI transitions.

/// Easing curve variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    CubicIn,
    /// Fast start, slow end. Default for enter transitions.
    #[default]
    CubicOut,
    CubicInOut,
}

impl Easing {
    /// Evaluate at `t`, clamped to [0, 1].
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => cubic_out(t),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let f = 2.0 * t - 2.0;
                    0.5 * f * f * f + 1.0
                }
            }
        }
    }
}

/// `(t - 1)^3 + 1`
#[inline]
pub fn cubic_out(t: f32) -> f32 {
    let f = t - 1.0;
    f * f * f + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
    ];

    #[test]
    fn endpoints() {
        for e in ALL {
            assert_eq!(e.evaluate(0.0), 0.0, "{e:?}");
            assert!((e.evaluate(1.0) - 1.0).abs() < 1e-6, "{e:?}");
        }
    }

    #[test]
    fn input_is_clamped() {
        for e in ALL {
            assert_eq!(e.evaluate(-0.5), e.evaluate(0.0));
            assert_eq!(e.evaluate(1.5), e.evaluate(1.0));
        }
    }

    #[test]
    fn cubic_out_is_ahead_of_linear() {
        assert_eq!(cubic_out(0.5), 0.875);
        assert!(Easing::CubicOut.evaluate(0.25) > 0.25);
        assert!(Easing::CubicIn.evaluate(0.25) < 0.25);
        assert_eq!(Easing::CubicInOut.evaluate(0.5), 0.5);
    }

    #[test]
    fn default_is_cubic_out() {
        assert_eq!(Easing::default(), Easing::CubicOut);
    }
}
