pub fn module_ready() -> bool {
    true
}

pub fn index_html() -> &'static str {
    include_str!("../static/index.html")
}

pub fn styles_css() -> &'static str {
    include_str!("../static/styles.css")
}

pub fn app_js() -> &'static str {
    include_str!("../static/app.js")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_bundle_contains_index_html() {
        let html = index_html();

        assert!(html.contains("<!doctype html>"));
        assert!(html.contains("/static/styles.css"));
        assert!(html.contains("/static/app.js"));
    }

    #[test]
    fn ui_shell_contains_the_capital_input_with_its_bounds() {
        let html = index_html();

        assert!(html.contains("id=\"initial-capital\""));
        assert!(html.contains("min=\"100\""));
        assert!(html.contains("max=\"1000000\""));
        assert!(html.contains("step=\"1000\""));
        assert!(html.contains("value=\"10000\""));
    }

    #[test]
    fn ui_shell_contains_the_three_tab_handles() {
        let html = index_html();

        assert!(html.contains("data-tab=\"animations\""));
        assert!(html.contains("data-tab=\"performance-overview\""));
        assert!(html.contains("data-tab=\"strategy-deep-dive\""));
    }

    #[test]
    fn ui_shell_contains_kpi_row_comparison_table_and_health_badge() {
        let html = index_html();

        assert!(html.contains("id=\"kpi-row\""));
        assert!(html.contains("id=\"comparison-table\""));
        assert!(html.contains("id=\"health-badge\""));
    }

    #[test]
    fn app_script_talks_to_the_dashboard_endpoints() {
        let js = app_js();

        assert!(js.contains("/api/summary"));
        assert!(js.contains("/api/panels"));
        assert!(js.contains("/health"));
    }

    #[test]
    fn app_script_renders_a_panel_error_card_on_image_failure() {
        let js = app_js();

        assert!(js.contains("onerror"));
        assert!(js.contains("panel-error"));
    }
}
