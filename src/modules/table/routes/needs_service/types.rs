pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub is_needs_service: bool,
    }

    pub struct Payload {
        pub auth: Auth,
        pub vendor_id: String,
        pub table_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::table::repository::Table;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        TableUpdated(Table),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableUpdated(table) => {
                    (StatusCode::OK, Json(json!({ "table": table }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        TableNotFound,
        NotTableHolder,
        FailedToUpdateTable,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Table not found" })),
                )
                    .into_response(),
                Self::NotTableHolder => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You are not seated at this table" })),
                )
                    .into_response(),
                Self::FailedToUpdateTable => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update table" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
