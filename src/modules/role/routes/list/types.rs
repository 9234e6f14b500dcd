pub mod response {
    use crate::{modules::role::repository::UserRole, utils::pagination::Paginated};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PaginatedRoles(Paginated<UserRole>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaginatedRoles(roles) => (StatusCode::OK, Json(json!(roles))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchRoles,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchRoles => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user roles" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
