use serde::Serialize;

use crate::baselines::{StrategyKind, BASELINES, CANONICAL_CAPITAL};
use crate::input::SimulationInput;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledEquity {
    pub strategy: StrategyKind,
    pub final_equity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    pub initial_capital: f64,
    pub multiplier: f64,
    pub equities: [ScaledEquity; 3],
}

impl SimulationResult {
    pub fn final_equity(&self, strategy: StrategyKind) -> f64 {
        self.equities
            .iter()
            .find(|equity| equity.strategy == strategy)
            .map(|equity| equity.final_equity)
            .unwrap_or(0.0)
    }
}

/// Scales the three fixed strategy baselines to the requested capital.
///
/// The multiplier is `initial_capital / 10_000.0`, the canonical backtest
/// capital every baseline was measured against. Scaling is strictly linear,
/// so the baseline ordering (HODL above DCA above Quant) carries over to
/// every valid input.
///
/// Pure and deterministic: no state, no I/O, identical output for identical
/// input. The input range is enforced by [`SimulationInput`], leaving no
/// error conditions here.
pub fn compute(input: SimulationInput) -> SimulationResult {
    let initial_capital = input.initial_capital();
    let multiplier = initial_capital / CANONICAL_CAPITAL;

    let equities = BASELINES.map(|baseline| ScaledEquity {
        strategy: baseline.kind,
        final_equity: baseline.base_final_equity * multiplier,
    });

    SimulationResult {
        initial_capital,
        multiplier,
        equities,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{compute, StrategyKind};
    use crate::baselines::CANONICAL_CAPITAL;
    use crate::input::SimulationInput;

    fn result_for(capital: f64) -> super::SimulationResult {
        compute(SimulationInput::new(capital).unwrap())
    }

    #[test]
    fn scaled_equities_are_exactly_linear_in_capital() {
        for capital in [100.0, 2_500.0, 10_000.0, 123_000.0, 1_000_000.0] {
            let result = result_for(capital);
            let multiplier = capital / CANONICAL_CAPITAL;

            assert_eq!(result.multiplier, multiplier);
            assert_eq!(
                result.final_equity(StrategyKind::Hodl),
                46_009.0 * multiplier
            );
            assert_eq!(
                result.final_equity(StrategyKind::Dca),
                31_328.0 * multiplier
            );
            assert_eq!(
                result.final_equity(StrategyKind::Quant),
                18_156.0 * multiplier
            );
        }
    }

    #[test]
    fn strategy_ordering_holds_across_the_capital_range() {
        let mut capital = 100.0;
        while capital <= 1_000_000.0 {
            let result = result_for(capital);

            assert!(
                result.final_equity(StrategyKind::Hodl)
                    > result.final_equity(StrategyKind::Dca)
            );
            assert!(
                result.final_equity(StrategyKind::Dca)
                    > result.final_equity(StrategyKind::Quant)
            );

            capital += 33_300.0;
        }
    }

    #[test]
    fn identity_multiplier_reproduces_the_baselines() {
        let result = result_for(10_000.0);

        assert_eq!(result.multiplier, 1.0);
        assert_eq!(result.final_equity(StrategyKind::Hodl), 46_009.0);
        assert_eq!(result.final_equity(StrategyKind::Dca), 31_328.0);
        assert_eq!(result.final_equity(StrategyKind::Quant), 18_156.0);
    }

    #[test]
    fn minimum_capital_scales_to_the_documented_boundary_values() {
        let result = result_for(100.0);

        assert!((result.final_equity(StrategyKind::Hodl) - 460.09).abs() < 1e-9);
        assert!((result.final_equity(StrategyKind::Dca) - 313.28).abs() < 1e-9);
        assert!((result.final_equity(StrategyKind::Quant) - 181.56).abs() < 1e-9);
    }

    #[test]
    fn maximum_capital_scales_hodl_to_four_point_six_million() {
        let result = result_for(1_000_000.0);

        assert_eq!(result.multiplier, 100.0);
        assert_eq!(result.final_equity(StrategyKind::Hodl), 4_600_900.0);
    }

    #[test]
    fn compute_is_idempotent_for_identical_input() {
        let input = SimulationInput::new(77_000.0).unwrap();

        assert_eq!(compute(input), compute(input));
    }

    #[test]
    fn result_serializes_with_stable_strategy_ids() {
        let result = result_for(10_000.0);
        let value = serde_json::to_value(result).unwrap();

        assert_eq!(
            value,
            json!({
                "initial_capital": 10_000.0,
                "multiplier": 1.0,
                "equities": [
                    { "strategy": "hodl", "final_equity": 46_009.0 },
                    { "strategy": "dca", "final_equity": 31_328.0 },
                    { "strategy": "quant", "final_equity": 18_156.0 },
                ],
            })
        );
    }
}
