pub mod routes;
pub mod state;

use axum::Router;

pub fn module_ready() -> bool {
    true
}

pub fn app() -> Router {
    routes::router(state::AppState::default())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::app;

    #[tokio::test]
    async fn default_app_answers_the_summary_endpoint() {
        let app = app();

        let response = app
            .oneshot(
                Request::get("/api/summary?initial_capital=25000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn default_app_answers_the_panels_endpoint() {
        let app = app();

        let response = app
            .oneshot(Request::get("/api/panels").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
