pub mod response {
    use crate::modules::table::repository::Table;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        TableDeleted(Table),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableDeleted(table) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Table deleted successfully", "table": table })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        TableNotFound,
        FailedToDeleteTable,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Table not found" })),
                )
                    .into_response(),
                Self::FailedToDeleteTable => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to delete table" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
