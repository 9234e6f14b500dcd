pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(email(code = "INVALID_EMAIL", message = "must be a valid email address"))]
        pub email: String,
        #[validate(length(min = 8, code = "INVALID_PASSWORD", message = "must be at least 8 characters"))]
        pub password: String,
    }
}

pub mod response {
    use crate::utils::validation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use chrono::{DateTime, Utc};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        SignedIn {
            token: String,
            expires: DateTime<Utc>,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedIn { token, expires } => (
                    StatusCode::OK,
                    Json(json!({ "token": token, "expires": expires })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        InvalidCredentials,
        FailedToIssueToken,
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
                Self::InvalidCredentials => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Invalid email or password" })),
                )
                    .into_response(),
                Self::FailedToIssueToken => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to issue access token" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
