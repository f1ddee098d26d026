use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use presenter::{render_summary, render_tabs};
use serde::Deserialize;
use simulator::{compute, SimulationInput};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/styles.css", get(styles))
        .route("/static/app.js", get(script))
        .route("/api/summary", get(summary))
        .route("/api/panels", get(panels))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(ui::index_html())
}

async fn styles() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        ui::styles_css(),
    )
}

async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        ui::app_js(),
    )
}

#[derive(Debug, Deserialize)]
struct SummaryQuery {
    initial_capital: Option<f64>,
}

async fn summary(Query(query): Query<SummaryQuery>) -> impl IntoResponse {
    let input = match query.initial_capital {
        Some(capital) => SimulationInput::clamped(capital),
        None => SimulationInput::default(),
    };

    Json(render_summary(&compute(input)))
}

async fn panels(State(state): State<AppState>) -> impl IntoResponse {
    Json(render_tabs(state.source()))
}
