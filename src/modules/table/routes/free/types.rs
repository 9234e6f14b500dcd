pub mod response {
    use crate::modules::table::repository::Table;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        TableFreed(Table),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableFreed(table) => (
                    StatusCode::OK,
                    Json(json!({
                        "message": "Table freed and user orders deleted successfully",
                        "table": table
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        TableNotFound,
        FailedToFreeTable,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Table not found" })),
                )
                    .into_response(),
                Self::FailedToFreeTable => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to free table" })),
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
