pub mod response {
    use crate::modules::vendor_admin::repository::VendorAdmin;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Admins(Vec<VendorAdmin>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Admins(admins) => {
                    (StatusCode::OK, Json(json!({ "admins": admins }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchAdmins,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchAdmins => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch vendor admins" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
