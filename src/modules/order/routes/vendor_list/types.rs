pub mod response {
    use crate::modules::order::repository::FullOrder;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Orders(Vec<FullOrder>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Orders(orders) => {
                    (StatusCode::OK, Json(json!({ "orders": orders }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchOrders,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchOrders => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch orders" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
