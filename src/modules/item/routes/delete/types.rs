pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ItemDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Item deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ItemNotFound,
        FailedToDeleteItem,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Item not found" })),
                )
                    .into_response(),
                Self::FailedToDeleteItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete item" })),
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
