use serde::Serialize;
use simulator::{baseline_for, SimulationResult, StrategyKind};

use crate::format::format_usd;

// Fixed $10,000 backtest comparison. Not recomputed from the scaled values.
pub const DCA_VS_HODL: &str = "-31.9%";
pub const QUANT_VS_HODL: &str = "-60.5%";
pub const HODL_VS_HODL: &str = "baseline";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    pub strategy: StrategyKind,
    pub title: &'static str,
    pub label: &'static str,
    pub value: String,
    pub annotation: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub strategy: StrategyKind,
    pub final_equity: String,
    pub vs_hodl: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryModel {
    pub initial_capital: f64,
    pub multiplier: f64,
    pub kpis: Vec<KpiCard>,
    pub comparison: Vec<ComparisonRow>,
}

fn kpi_title(strategy: StrategyKind) -> &'static str {
    match strategy {
        StrategyKind::Hodl => "🏦 HODL (Buy & Hold)",
        StrategyKind::Dca => "📅 DCA (Dollar-Cost Avg)",
        StrategyKind::Quant => "🤖 Quant (Active Trading)",
    }
}

fn kpi_note(strategy: StrategyKind) -> &'static str {
    match strategy {
        StrategyKind::Hodl => {
            "Buy once, hold forever. Highest absolute return, for investors who can \
             stomach the volatility."
        }
        StrategyKind::Dca => {
            "A fixed buy every month. Lower risk and smoother growth, the most robust \
             choice for most people."
        }
        StrategyKind::Quant => {
            "Buys and sells on technical signals. Underperformed badly in the test \
             period, a textbook case of overfitting."
        }
    }
}

fn vs_hodl(strategy: StrategyKind) -> &'static str {
    match strategy {
        StrategyKind::Hodl => HODL_VS_HODL,
        StrategyKind::Dca => DCA_VS_HODL,
        StrategyKind::Quant => QUANT_VS_HODL,
    }
}

pub fn render_summary(result: &SimulationResult) -> SummaryModel {
    let kpis = result
        .equities
        .iter()
        .map(|equity| KpiCard {
            strategy: equity.strategy,
            title: kpi_title(equity.strategy),
            label: "Final Equity",
            value: format_usd(equity.final_equity),
            annotation: baseline_for(equity.strategy).risk_annotation,
            note: kpi_note(equity.strategy),
        })
        .collect();

    let comparison = result
        .equities
        .iter()
        .map(|equity| ComparisonRow {
            strategy: equity.strategy,
            final_equity: format_usd(equity.final_equity),
            vs_hodl: vs_hodl(equity.strategy),
        })
        .collect();

    SummaryModel {
        initial_capital: result.initial_capital,
        multiplier: result.multiplier,
        kpis,
        comparison,
    }
}
