pub mod response {
    use crate::modules::table::repository::Table;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Table(Table),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Table(table) => (StatusCode::OK, Json(json!({ "table": table }))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchTable,
        NoTable,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchTable => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch table" })),
                )
                    .into_response(),
                Self::NoTable => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User has no table" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
