pub mod request {
    use crate::modules::auth::middleware::VendorAuth;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        pub name: String,
        pub price: String,
        pub discount: Option<String>,
        pub discount_days: Option<i32>,
        pub quantity: i32,
        #[form_data(field_name = "img", limit = "10MiB")]
        pub image: Option<FieldData<NamedTempFile>>,
    }

    pub struct Payload {
        pub auth: VendorAuth,
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::item::repository::Item, utils::validation};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ItemCreated(Item),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemCreated(item) => {
                    (StatusCode::CREATED, Json(json!({ "item": item }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidImage,
        ImageUploadFailed,
        FailedToCreateItem,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
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
                Self::FailedToCreateItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create item" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
