pub mod response {
    use crate::modules::role::repository::UserRole;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Role(UserRole),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Role(role) => {
                    (StatusCode::OK, Json(json!({ "user_role": role }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        UserNotFound,
        FailedToFetchRole,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::FailedToFetchRole => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user role" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
