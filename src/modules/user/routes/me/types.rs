pub mod response {
    use crate::modules::user::repository::User;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        User(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::User(user) => (StatusCode::OK, Json(json!({ "me": user }))).into_response(),
            }
        }
    }

    pub enum Error {}

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {}
        }
    }

    pub type Response = Result<Success, Error>;
}
