use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::config::Config;
use crate::fetch::{fetch_panel_image, PanelFetchError};

#[derive(Clone)]
struct ProxyState {
    client: reqwest::Client,
    source: presenter::ChartSource,
}

pub fn build_app(config: &Config) -> Result<Router, reqwest::Error> {
    debug_assert!(simulator::module_ready());
    debug_assert!(presenter::module_ready());
    debug_assert!(api::module_ready());
    debug_assert!(ui::module_ready());

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.fetch_timeout_ms))
        .build()?;
    let proxy = ProxyState {
        client,
        source: config.chart_source.clone(),
    };

    let app = api::routes::router(api::state::AppState::new(config.chart_source.clone()))
        .route("/health", get(healthcheck))
        .merge(
            Router::new()
                .route("/panels/:filename", get(panel_image))
                .with_state(proxy),
        );

    Ok(app)
}

async fn healthcheck() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
struct PanelErrorBody {
    filename: String,
    error: String,
}

async fn panel_image(
    Path(filename): Path<String>,
    State(state): State<ProxyState>,
) -> Response {
    match fetch_panel_image(&state.client, &state.source, &filename).await {
        Ok(image) => (
            [(header::CONTENT_TYPE, image.content_type)],
            image.bytes,
        )
            .into_response(),
        Err(PanelFetchError::UnknownPanel) => (
            StatusCode::NOT_FOUND,
            Json(PanelErrorBody {
                error: PanelFetchError::UnknownPanel.to_string(),
                filename,
            }),
        )
            .into_response(),
        Err(err @ PanelFetchError::Upstream { .. }) => {
            log::warn!("panel {filename} unavailable: {err}");
            (
                StatusCode::BAD_GATEWAY,
                Json(PanelErrorBody {
                    error: err.to_string(),
                    filename,
                }),
            )
                .into_response()
        }
    }
}
