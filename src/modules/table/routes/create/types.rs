pub mod request {
    use crate::modules::auth::middleware::VendorAuth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(length(
            min = 1,
            max = 20,
            code = "INVALID_NAME",
            message = "must be between 1 and 20 characters"
        ))]
        pub name: String,
    }

    pub struct Payload {
        pub auth: VendorAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::table::repository::Table, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        TableCreated(Table),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::TableCreated(table) => {
                    (StatusCode::CREATED, Json(json!({ "table": table }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        VendorNotFound,
        TableLimitReached,
        FailedToCreateTable,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::VendorNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Vendor not found" })),
                )
                    .into_response(),
                Self::TableLimitReached => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Vendor has reached the maximum number of tables (12)" })),
                )
                    .into_response(),
                Self::FailedToCreateTable => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create table" })),
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
