pub mod format;
pub mod panels;
pub mod render;
pub mod summary;

pub use format::format_usd;
pub use panels::{
    panel_by_filename, ChartPanel, ChartSource, ChartSourceError, DashboardTab, PANELS,
};
pub use render::{render_panel, render_tabs, PanelView, TabView};
pub use summary::{render_summary, ComparisonRow, KpiCard, SummaryModel};

pub fn module_ready() -> bool {
    true
}
