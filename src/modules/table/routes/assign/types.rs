pub mod response {
    use crate::modules::table::repository::Table;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        TableAssigned(Table),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableAssigned(table) => {
                    (StatusCode::OK, Json(json!({ "table": table }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        TableNotFound,
        AlreadyAssigned,
        TableOccupied,
        FailedToAssignTable,
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
                Self::AlreadyAssigned => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "You are already assigned to another table" })),
                )
                    .into_response(),
                Self::TableOccupied => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "The table is not available! Try again later" })),
                )
                    .into_response(),
                Self::FailedToAssignTable => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to assign table" })),
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
