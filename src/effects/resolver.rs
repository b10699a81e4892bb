//! Effect resolution - applying effects to tuning.
//!
//! Every effect is clamped so the tuning invariants hold afterwards:
//! - Coefficients stay in [0, 1]
//! - Bounds keep `0 <= min <= max <= 255`
//! - Abstraction saturates instead of overflowing

use crate::core::{Tuning, CHANNEL_LIMIT};

use super::Effect;

/// Result of resolving an effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolveResult {
    /// Applied in full.
    Applied,
    /// Applied partially; `applied` is the change actually made.
    Clamped { requested: f64, applied: f64 },
}

/// Resolves effects on tuning.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve effects in order.
    pub fn resolve_all<'e>(
        tuning: &mut Tuning,
        effects: impl IntoIterator<Item = &'e Effect>,
    ) -> Vec<ResolveResult> {
        effects
            .into_iter()
            .map(|effect| Self::resolve(tuning, effect))
            .collect()
    }

    /// Resolve a single effect.
    pub fn resolve(tuning: &mut Tuning, effect: &Effect) -> ResolveResult {
        match *effect {
            Effect::Coefficient { channel, delta } => {
                let value = &mut tuning.coefficients[channel];
                Self::shift(value, delta, 0.0, 1.0)
            }

            Effect::BoundMin { channel, delta } => {
                let bound = &mut tuning.bounds[channel];
                let ceiling = bound.max;
                Self::shift(&mut bound.min, delta, 0.0, ceiling)
            }

            Effect::BoundMax { channel, delta } => {
                let bound = &mut tuning.bounds[channel];
                let floor = bound.min;
                Self::shift(&mut bound.max, delta, floor, CHANNEL_LIMIT)
            }

            Effect::AbstractionDelta { amount } => {
                let before = tuning.abstraction;
                tuning.abstraction = before.saturating_add(amount);
                let applied = tuning.abstraction - before;
                if applied == amount {
                    ResolveResult::Applied
                } else {
                    ResolveResult::Clamped {
                        requested: f64::from(amount),
                        applied: f64::from(applied),
                    }
                }
            }
        }
    }

    fn shift(value: &mut f64, delta: f64, lo: f64, hi: f64) -> ResolveResult {
        let before = *value;
        let target = before + delta;
        *value = target.clamp(lo, hi);

        if *value == target {
            ResolveResult::Applied
        } else {
            ResolveResult::Clamped {
                requested: delta,
                applied: *value - before,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bound, Channel};

    #[test]
    fn test_coefficient_applies() {
        let mut tuning = Tuning::default();
        let result = EffectResolver::resolve(&mut tuning, &Effect::coefficient(Channel::R, 0.02));

        assert_eq!(result, ResolveResult::Applied);
        assert!((tuning.coefficients[Channel::R] - 0.35).abs() < 1e-12);
        assert_eq!(tuning.coefficients[Channel::G], 0.33);
    }

    #[test]
    fn test_coefficient_clamps_at_zero() {
        let mut tuning = Tuning::default();
        tuning.coefficients[Channel::B] = 0.01;

        let result = EffectResolver::resolve(&mut tuning, &Effect::coefficient(Channel::B, -0.05));

        assert_eq!(tuning.coefficients[Channel::B], 0.0);
        assert!(matches!(result, ResolveResult::Clamped { .. }));
    }

    #[test]
    fn test_coefficient_clamps_at_one() {
        let mut tuning = Tuning::default();
        tuning.coefficients[Channel::G] = 0.99;

        EffectResolver::resolve(&mut tuning, &Effect::coefficient(Channel::G, 0.05));
        assert_eq!(tuning.coefficients[Channel::G], 1.0);
    }

    #[test]
    fn test_bound_min_cannot_pass_max() {
        let mut tuning = Tuning::default();
        tuning.bounds[Channel::R] = Bound::new(10.0, 10.5);

        EffectResolver::resolve(&mut tuning, &Effect::bound_min(Channel::R, 2.0));

        assert_eq!(tuning.bounds[Channel::R], Bound::new(10.5, 10.5));
        assert!(tuning.is_valid());
    }

    #[test]
    fn test_bound_min_floor() {
        let mut tuning = Tuning::default();
        tuning.bounds[Channel::G] = Bound::new(0.4, 5.0);

        EffectResolver::resolve(&mut tuning, &Effect::bound_min(Channel::G, -1.0));
        assert_eq!(tuning.bounds[Channel::G].min, 0.0);
    }

    #[test]
    fn test_bound_max_limits() {
        let mut tuning = Tuning::default();
        tuning.bounds[Channel::B] = Bound::new(4.0, 254.0);

        let result = EffectResolver::resolve(&mut tuning, &Effect::bound_max(Channel::B, 2.0));
        assert_eq!(tuning.bounds[Channel::B].max, 255.0);
        assert_eq!(
            result,
            ResolveResult::Clamped { requested: 2.0, applied: 1.0 }
        );

        tuning.bounds[Channel::B] = Bound::new(4.0, 4.5);
        EffectResolver::resolve(&mut tuning, &Effect::bound_max(Channel::B, -2.0));
        assert_eq!(tuning.bounds[Channel::B].max, 4.0);
    }

    #[test]
    fn test_abstraction_increments() {
        let mut tuning = Tuning::default();
        EffectResolver::resolve(&mut tuning, &Effect::abstraction(1));
        EffectResolver::resolve(&mut tuning, &Effect::abstraction(1));
        assert_eq!(tuning.abstraction, 2);
    }

    #[test]
    fn test_empty_list_is_identity() {
        let mut tuning = Tuning::default();
        let before = tuning.clone();

        let none: [Effect; 0] = [];
        let results = EffectResolver::resolve_all(&mut tuning, &none);

        assert!(results.is_empty());
        assert_eq!(tuning, before);
    }

    #[test]
    fn test_resolve_all_in_order() {
        let mut tuning = Tuning::default();
        let effects = [Effect::abstraction(1), Effect::bound_max(Channel::R, 1.5)];

        let results = EffectResolver::resolve_all(&mut tuning, &effects);

        assert_eq!(results, vec![ResolveResult::Applied, ResolveResult::Applied]);
        assert_eq!(tuning.abstraction, 1);
        assert_eq!(tuning.bounds[Channel::R].max, 22.0);
    }
}
