use crate::{modules, types::Context};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json, Router,
};
use serde_json::json;
use std::{any::Any, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, cors, services::ServeDir, trace};

pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        String::from("unknown panic payload")
    };

    tracing::error!("Request handler panicked: {}", details);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal Server Error" })),
    )
        .into_response()
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "The requested resource could not be found" })),
    )
}

pub fn get_router(ctx: Arc<Context>) -> Router {
    Router::new()
        .merge(modules::get_router())
        .nest_service("/uploads", ServeDir::new(&ctx.storage.upload_dir))
        .fallback(not_found)
        .with_state(ctx.clone())
        .layer(Extension(ctx))
        .layer(DefaultBodyLimit::max(1024 * 1024 * 10))
        .layer(trace::TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            cors::CorsLayer::new()
                .allow_methods([
                    Method::OPTIONS,
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(cors::Any),
        )
}

pub struct App {
    ctx: Arc<Context>,
    router: Router,
}

impl App {
    pub fn new(ctx: Arc<Context>) -> Self {
        let router = get_router(ctx.clone());

        Self { ctx, router }
    }

    pub async fn serve(self) -> std::io::Result<()> {
        let address = format!("{}:{}", self.ctx.app.host, self.ctx.app.port);
        let listener = TcpListener::bind(&address).await?;

        tracing::info!("App is running on {}", address);

        axum::serve(listener, self.router).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn boom() -> &'static str {
        panic!("boom")
    }

    #[tokio::test]
    async fn panicking_handler_becomes_json_500() {
        let router: Router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let response = router
            .oneshot(Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "Internal Server Error");
    }
}
