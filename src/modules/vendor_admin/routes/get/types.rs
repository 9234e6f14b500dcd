pub mod response {
    use crate::modules::vendor_admin::repository::VendorAdmin;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Admin(VendorAdmin),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Admin(admin) => (StatusCode::OK, Json(json!({ "admin": admin }))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchAdmin,
        AdminNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchAdmin => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch vendor admin" })),
                )
                    .into_response(),
                Self::AdminNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Vendor admin not found" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
