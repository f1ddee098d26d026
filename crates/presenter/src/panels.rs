use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    Animations,
    PerformanceOverview,
    StrategyDeepDive,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        Self::Animations,
        Self::PerformanceOverview,
        Self::StrategyDeepDive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Animations => "animations",
            Self::PerformanceOverview => "performance-overview",
            Self::StrategyDeepDive => "strategy-deep-dive",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Animations => "Time-Lapse Animations",
            Self::PerformanceOverview => "Performance Overview",
            Self::StrategyDeepDive => "Strategy Deep Dive",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Animations => "🎬",
            Self::PerformanceOverview => "📈",
            Self::StrategyDeepDive => "🧠",
        }
    }

    pub fn load_note(self) -> Option<&'static str> {
        match self {
            Self::Animations => Some("Animations might take a few seconds to load."),
            Self::PerformanceOverview | Self::StrategyDeepDive => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPanel {
    pub filename: &'static str,
    pub tab: DashboardTab,
    pub title: &'static str,
    pub icon: &'static str,
    pub explanation: &'static str,
}

pub static PANELS: [ChartPanel; 7] = [
    ChartPanel {
        filename: "portfolio_value_training_animated.gif",
        tab: DashboardTab::Animations,
        title: "Time Machine: Training Period (2010-2020)",
        icon: "🎬",
        explanation: "HODL starts fast and swings hard. DCA climbs steadily through every \
                      drawdown. The Quant model trades its way through the training years \
                      and holds up well here.",
    },
    ChartPanel {
        filename: "portfolio_value_test_animated.gif",
        tab: DashboardTab::Animations,
        title: "Time Machine: Test Period (2023-2024)",
        icon: "🎬",
        explanation: "Watch the Quant line struggle to keep up with plain HODL and DCA. A \
                      strategy fitted to the past failing on new market conditions is \
                      overfitting in action.",
    },
    ChartPanel {
        filename: "portfolio_value_training.png",
        tab: DashboardTab::PerformanceOverview,
        title: "Full History: Training Set",
        icon: "📈",
        explanation: "Ten years of raw dollar growth on a standard linear scale. The later \
                      years dwarf the early days in absolute gains.",
    },
    ChartPanel {
        filename: "portfolio_value_test.png",
        tab: DashboardTab::PerformanceOverview,
        title: "Recent Performance: Test Set",
        icon: "📉",
        explanation: "The Quant line flatlines near the bottom while HODL and DCA rally \
                      with the market. In a strong bull market the simple strategies win.",
    },
    ChartPanel {
        filename: "factor_weights_en.png",
        tab: DashboardTab::StrategyDeepDive,
        title: "Feature Importance",
        icon: "🧠",
        explanation: "Taller bars carry more weight in the model's buy and sell calls. \
                      These are the technical indicators, such as RSI and moving averages, \
                      the algorithm actually listens to.",
    },
    ChartPanel {
        filename: "position_changes.png",
        tab: DashboardTab::StrategyDeepDive,
        title: "Market Timing",
        icon: "🚥",
        explanation: "Filled regions mean the model holds Bitcoin, empty regions mean it \
                      has sold everything into cash. Frequent switching marks a nervous, \
                      choppy model.",
    },
    ChartPanel {
        filename: "cumulative_trades.png",
        tab: DashboardTab::StrategyDeepDive,
        title: "Trading Frequency",
        icon: "💸",
        explanation: "A steeper slope means more frequent trading. HODL is a single trade \
                      and stays flat, while Quant racks up hundreds, and every trade pays \
                      a 0.15% fee that eats into returns.",
    },
];

pub fn panel_by_filename(filename: &str) -> Option<&'static ChartPanel> {
    PANELS.iter().find(|panel| panel.filename == filename)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSourceError {
    InvalidBaseUrl,
}

impl fmt::Display for ChartSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBaseUrl => {
                write!(f, "chart base URL must start with http:// or https://")
            }
        }
    }
}

impl std::error::Error for ChartSourceError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSource {
    base_url: String,
}

impl ChartSource {
    pub fn github(user: &str, repo: &str, branch: &str, subdirectory: &str) -> Self {
        Self {
            base_url: format!(
                "https://raw.githubusercontent.com/{user}/{repo}/{branch}/{subdirectory}"
            ),
        }
    }

    /// Accepts a raw base-URL override. Trailing slashes are trimmed so
    /// resolution never produces a double slash.
    pub fn from_base_url(base_url: &str) -> Result<Self, ChartSourceError> {
        let trimmed = base_url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() => Ok(Self {
                base_url: trimmed.to_string(),
            }),
            _ => Err(ChartSourceError::InvalidBaseUrl),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resolved_url(&self, filename: &str) -> String {
        format!("{}/{filename}", self.base_url)
    }
}

impl Default for ChartSource {
    fn default() -> Self {
        Self::github(
            "lucky11chances",
            "bitcoin-investment-strategies-draft",
            "main",
            "visualization",
        )
    }
}
