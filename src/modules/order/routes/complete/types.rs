pub mod response {
    use crate::modules::order::repository::Order;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderCompleted(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCompleted(order) => {
                    (StatusCode::OK, Json(json!({ "order": order }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        Forbidden,
        AlreadyCompleted,
        FailedToUpdateOrder,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Order not found" })),
                )
                    .into_response(),
                Self::Forbidden => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You don't have permission to access this resource" })),
                )
                    .into_response(),
                Self::AlreadyCompleted => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Order is already completed" })),
                )
                    .into_response(),
                Self::FailedToUpdateOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
