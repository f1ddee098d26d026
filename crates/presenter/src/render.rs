use serde::Serialize;

use crate::panels::{ChartPanel, ChartSource, DashboardTab, PANELS};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub filename: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub explanation: &'static str,
    pub image_url: String,
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub load_note: Option<&'static str>,
    pub panels: Vec<PanelView>,
}

pub fn render_panel(source: &ChartSource, panel: &ChartPanel) -> PanelView {
    PanelView {
        filename: panel.filename,
        title: panel.title,
        icon: panel.icon,
        explanation: panel.explanation,
        image_url: format!("/panels/{}", panel.filename),
        source_url: source.resolved_url(panel.filename),
    }
}

pub fn render_tabs(source: &ChartSource) -> Vec<TabView> {
    DashboardTab::ALL
        .iter()
        .map(|tab| TabView {
            id: tab.as_str(),
            title: tab.title(),
            icon: tab.icon(),
            load_note: tab.load_note(),
            panels: PANELS
                .iter()
                .filter(|panel| panel.tab == *tab)
                .map(|panel| render_panel(source, panel))
                .collect(),
        })
        .collect()
}
