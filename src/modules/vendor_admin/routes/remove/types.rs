pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AdminRemoved,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminRemoved => (
                    StatusCode::OK,
                    Json(json!({ "message": "Vendor admin removed successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        AdminNotFound,
        FailedToRemoveAdmin,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Vendor admin not found" })),
                )
                    .into_response(),
                Self::FailedToRemoveAdmin => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to remove vendor admin" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sorry an error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
