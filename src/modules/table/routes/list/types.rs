pub mod response {
    use crate::modules::table::repository::Table;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Tables(Vec<Table>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Tables(tables) => {
                    (StatusCode::OK, Json(json!({ "tables": tables }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchTables,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchTables => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch tables" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
