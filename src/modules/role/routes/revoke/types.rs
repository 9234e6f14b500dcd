pub mod request {
    use crate::modules::user::repository::Role;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub user_id: String,
        pub role: Role,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        RoleRevoked,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RoleRevoked => (
                    StatusCode::OK,
                    Json(json!({ "message": "Role revoked" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        UserNotFound,
        RoleNotHeld,
        NothingToRevoke,
        FailedToRevokeRole,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::RoleNotHeld => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User does not have this role" })),
                )
                    .into_response(),
                Self::NothingToRevoke => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "User has no role to revoke" })),
                )
                    .into_response(),
                Self::FailedToRevokeRole => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to revoke role" })),
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
