pub mod baselines;
pub mod compute;
pub mod input;

pub use baselines::{baseline_for, StrategyBaseline, StrategyKind, BASELINES, CANONICAL_CAPITAL};
pub use compute::{compute, ScaledEquity, SimulationResult};
pub use input::{
    SimulationInput, SimulatorError, CAPITAL_STEP, DEFAULT_CAPITAL, MAX_CAPITAL, MIN_CAPITAL,
};

pub fn module_ready() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use crate::{compute, SimulationInput, StrategyKind};

    #[test]
    fn clamped_edge_input_flows_through_compute() {
        let result = compute(SimulationInput::clamped(50.0));

        assert_eq!(result.initial_capital, 100.0);
        assert!((result.final_equity(StrategyKind::Hodl) - 460.09).abs() < 1e-9);
    }

    #[test]
    fn default_input_reproduces_the_canonical_snapshot() {
        let result = compute(SimulationInput::default());

        assert_eq!(result.final_equity(StrategyKind::Hodl), 46_009.0);
    }
}
