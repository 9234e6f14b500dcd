pub mod request {
    use crate::modules::{auth::middleware::AdminAuth, user::repository::Role};
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub role: Role,
        pub vendor_id: Option<String>,
    }

    pub struct Payload {
        pub auth: AdminAuth,
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::role::repository::UserRole, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        RoleGranted(UserRole),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RoleGranted(role) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Role granted", "user_role": role })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        UserNotFound,
        VendorNotFound,
        DuplicatedRole,
        AlreadyVendorAdmin,
        FailedToGrantRole,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::UserNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "User not found" })),
                )
                    .into_response(),
                Self::VendorNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Vendor not found" })),
                )
                    .into_response(),
                Self::DuplicatedRole => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "User already has this role" })),
                )
                    .into_response(),
                Self::AlreadyVendorAdmin => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "User already manages this vendor" })),
                )
                    .into_response(),
                Self::FailedToGrantRole => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to grant role" })),
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
