//! Budgeted effect generation.
//!
//! Each card draws a budget. Positive budgets buy buffs, negative budgets
//! buy coefficient penalties, and every effect debits its cost until the
//! budget is close to zero or the card is full. Bound effects are only
//! offered on positive budgets, so penalties never shrink a sampling range.

use super::effect::{Effect, EffectKind, EffectList};
use crate::core::{Channel, EffectConfig, RandomSource};

/// Effect kinds a positive budget may buy.
const BUFF_POOL: [EffectKind; 3] = [EffectKind::Coefficient, EffectKind::BoundMin, EffectKind::BoundMax];

/// Generates the effect list for one card.
#[derive(Clone, Copy, Debug)]
pub struct EffectGenerator<'a> {
    config: &'a EffectConfig,
}

impl<'a> EffectGenerator<'a> {
    pub fn new(config: &'a EffectConfig) -> Self {
        Self { config }
    }

    /// Generate at most `max_effects` effects.
    pub fn generate<R>(&self, rng: &mut R) -> EffectList
    where
        R: RandomSource + ?Sized,
    {
        let config = self.config;
        let mut budget = rng.uniform(-config.budget_range, config.budget_range);
        let mut effects = EffectList::new();

        // Drawn independently of the budget's sign
        if rng.chance(config.abstraction_chance) {
            effects.push(Effect::abstraction(1));
            if config.abstraction_exclusive {
                return effects;
            }
            budget -= config.abstraction_cost;
        }

        while budget.abs() > config.budget_threshold && effects.len() < config.max_effects {
            let kind = if budget > 0.0 {
                BUFF_POOL[rng.below(BUFF_POOL.len())]
            } else {
                EffectKind::Coefficient
            };
            let channel = Channel::ALL[rng.below(Channel::ALL.len())];
            let sign = if budget > 0.0 { 1.0 } else { -1.0 };

            let (effect, cost) = match kind {
                EffectKind::Coefficient => {
                    let span = config.coefficient_magnitude;
                    let delta = sign * rng.uniform(span.min, span.max);
                    (Effect::coefficient(channel, delta), delta * 100.0 * config.coefficient_weight)
                }
                EffectKind::BoundMin | EffectKind::BoundMax => {
                    let span = config.bound_magnitude;
                    let delta = sign * rng.uniform(span.min, span.max);
                    let effect = if kind == EffectKind::BoundMin {
                        Effect::bound_min(channel, delta)
                    } else {
                        Effect::bound_max(channel, delta)
                    };
                    (effect, delta * config.bound_weight)
                }
                EffectKind::Abstraction => unreachable!("abstraction is never bought with budget"),
            };

            effects.push(effect);
            budget -= cost;
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    struct Scripted(std::vec::IntoIter<f64>);

    impl Scripted {
        fn new(draws: &[f64]) -> Self {
            Self(draws.to_vec().into_iter())
        }
    }

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            self.0.next().expect("script exhausted")
        }
    }

    #[test]
    fn test_small_budget_yields_no_effects() {
        let config = EffectConfig::default();
        // budget = -2 + 0.6 * 4 = 0.4, no abstraction
        let mut rng = Scripted::new(&[0.6, 0.9]);

        let effects = EffectGenerator::new(&config).generate(&mut rng);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_abstraction_funds_a_buff() {
        let config = EffectConfig::default();
        // budget 0.0, abstraction taken -> budget 5.0
        // then BoundMax (0.9), channel G (0.5), magnitude 0.5 + 0.0 * 1.5
        let mut rng = Scripted::new(&[0.5, 0.1, 0.9, 0.5, 0.0]);

        let effects = EffectGenerator::new(&config).generate(&mut rng);
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], Effect::abstraction(1));
        assert_eq!(effects[1], Effect::bound_max(Channel::G, 0.5));
    }

    #[test]
    fn test_negative_budget_only_buys_coefficient_penalties() {
        let config = EffectConfig::default();
        // budget = -2 + 0.0 * 4 = -2.0, no abstraction
        // penalty on R of 0.01 + 0.25 * 0.04 = 0.02 -> budget back to 0
        let mut rng = Scripted::new(&[0.0, 0.9, 0.0, 0.25]);

        let effects = EffectGenerator::new(&config).generate(&mut rng);
        assert_eq!(effects.len(), 1);
        match effects[0] {
            Effect::Coefficient { channel, delta } => {
                assert_eq!(channel, Channel::R);
                assert!((delta + 0.02).abs() < 1e-12);
            }
            other => panic!("Expected Coefficient, got {other:?}"),
        }
    }

    #[test]
    fn test_exclusive_abstraction() {
        let config = EffectConfig {
            abstraction_chance: 0.25,
            abstraction_exclusive: true,
            ..EffectConfig::default()
        };
        let mut rng = Scripted::new(&[0.5, 0.2]);

        let effects = EffectGenerator::new(&config).generate(&mut rng);
        assert_eq!(effects.as_slice(), &[Effect::abstraction(1)]);
    }

    #[test]
    fn test_never_exceeds_cap() {
        let config = EffectConfig::default();
        let generator = EffectGenerator::new(&config);
        let mut rng = GameRng::new(3);

        for _ in 0..5_000 {
            let effects = generator.generate(&mut rng);
            assert!(effects.len() <= 2);
            let abstraction_count = effects
                .iter()
                .filter(|e| e.kind() == EffectKind::Abstraction)
                .count();
            assert!(abstraction_count <= 1);
        }
    }

    #[test]
    fn test_magnitudes_within_spans() {
        let config = EffectConfig::default();
        let generator = EffectGenerator::new(&config);
        let mut rng = GameRng::new(11);

        for _ in 0..5_000 {
            for effect in generator.generate(&mut rng) {
                match effect {
                    Effect::Coefficient { delta, .. } => {
                        assert!((0.01..=0.05).contains(&delta.abs()));
                    }
                    Effect::BoundMin { delta, .. } | Effect::BoundMax { delta, .. } => {
                        assert!(delta > 0.0, "bound penalties are never generated");
                        assert!((0.5..=2.0).contains(&delta));
                    }
                    Effect::AbstractionDelta { amount } => assert_eq!(amount, 1),
                }
            }
        }
    }
}
