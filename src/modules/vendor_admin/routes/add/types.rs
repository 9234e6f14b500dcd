pub mod request {
    use crate::modules::auth::middleware::VendorAuth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(email(code = "INVALID_EMAIL", message = "must be a valid email address"))]
        pub email: String,
    }

    pub struct Payload {
        pub auth: VendorAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::vendor_admin::repository::VendorAdmin, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        AdminAdded(VendorAdmin),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdminAdded(admin) => {
                    (StatusCode::CREATED, Json(json!({ "admin": admin }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        UserNotFound,
        VendorNotFound,
        TargetIsAdmin,
        AlreadyVendorAdmin,
        FailedToAddAdmin,
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
                Self::TargetIsAdmin => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Admins already manage every vendor" })),
                )
                    .into_response(),
                Self::AlreadyVendorAdmin => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "User already manages this vendor" })),
                )
                    .into_response(),
                Self::FailedToAddAdmin => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to add vendor admin" })),
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
