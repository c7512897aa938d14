/// Easing functions for settle animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Quintic ease-out, `1 - (1 - t)^5`. The curve platform drag helpers
    /// use to settle a released view.
    Decelerate,
}

impl Easing {
    /// Applies the easing to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::Decelerate => {
                let inverse = 1.0 - fraction;
                1.0 - inverse * inverse * inverse * inverse * inverse
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::Decelerate] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
        }
    }

    #[test]
    fn decelerate_runs_ahead_of_linear() {
        for fraction in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert!(Easing::Decelerate.transform(fraction) > fraction);
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::Decelerate.transform(-0.5), 0.0);
        assert_eq!(Easing::Decelerate.transform(1.5), 1.0);
    }
}
