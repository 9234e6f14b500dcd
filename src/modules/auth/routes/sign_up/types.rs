pub mod request {
    use crate::utils::validation::validate_phone_number;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;
    use validator::Validate;

    #[derive(TryFromMultipart, Validate)]
    pub struct Payload {
        #[validate(length(
            min = 3,
            max = 20,
            code = "INVALID_NAME",
            message = "must be between 3 and 20 characters"
        ))]
        pub name: String,
        #[validate(custom(code = "INVALID_PHONE_NUMBER", function = "validate_phone_number"))]
        pub phone: String,
        #[validate(email(code = "INVALID_EMAIL", message = "must be a valid email address"))]
        pub email: String,
        #[validate(length(
            min = 8,
            max = 72,
            code = "INVALID_PASSWORD",
            message = "must be between 8 and 72 characters"
        ))]
        pub password: String,
        #[form_data(field_name = "img", limit = "10MiB")]
        pub image: Option<FieldData<NamedTempFile>>,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        SignedUp(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedUp(user) => {
                    (StatusCode::CREATED, Json(json!({ "user": user }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        EmailAlreadyInUse,
        InvalidImage,
        ImageUploadFailed,
        SignupFailed,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::FailedToFetchUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response(),
                Self::EmailAlreadyInUse => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Email already in use" })),
                )
                    .into_response(),
                Self::InvalidImage => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "invalid image" })),
                )
                    .into_response(),
                Self::ImageUploadFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to upload image" })),
                )
                    .into_response(),
                Self::SignupFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sign up failed!" })),
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
