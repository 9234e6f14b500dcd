pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        OrderDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Order deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        OrderNotFound,
        Forbidden,
        FailedToDeleteOrder,
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
                Self::FailedToDeleteOrder => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete order" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
