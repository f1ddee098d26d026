use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Hodl,
    Dca,
    Quant,
}

impl StrategyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hodl => "hodl",
            Self::Dca => "dca",
            Self::Quant => "quant",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyBaseline {
    pub kind: StrategyKind,
    pub base_final_equity: f64,
    pub risk_annotation: &'static str,
}

/// Initial capital of the backtest every baseline was measured against.
pub const CANONICAL_CAPITAL: f64 = 10_000.0;

/// Final equity per strategy under the canonical capital, in descending
/// order. Fixed at build time, never recomputed.
pub const BASELINES: [StrategyBaseline; 3] = [
    StrategyBaseline {
        kind: StrategyKind::Hodl,
        base_final_equity: 46_009.0,
        risk_annotation: "Highest Return",
    },
    StrategyBaseline {
        kind: StrategyKind::Dca,
        base_final_equity: 31_328.0,
        risk_annotation: "Sharpe Ratio 3.04",
    },
    StrategyBaseline {
        kind: StrategyKind::Quant,
        base_final_equity: 18_156.0,
        risk_annotation: "-60% vs HODL",
    },
];

pub fn baseline_for(kind: StrategyKind) -> StrategyBaseline {
    match kind {
        StrategyKind::Hodl => BASELINES[0],
        StrategyKind::Dca => BASELINES[1],
        StrategyKind::Quant => BASELINES[2],
    }
}
