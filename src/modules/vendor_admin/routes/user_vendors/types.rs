pub mod response {
    use crate::modules::vendor::repository::Vendor;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Vendors(Vec<Vendor>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Vendors(vendors) => {
                    (StatusCode::OK, Json(json!({ "vendors": vendors }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        Forbidden,
        FailedToFetchVendors,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Forbidden => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You don't have permission to access this resource" })),
                )
                    .into_response(),
                Self::FailedToFetchVendors => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch vendors" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
