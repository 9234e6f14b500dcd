pub mod request {
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
        pub vendor_id: String,
        pub table_id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::table::repository::Table, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

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
        FailedToValidate(ValidationErrors),
        TableNotFound,
        FailedToUpdateTable,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::TableNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Table not found" })),
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
