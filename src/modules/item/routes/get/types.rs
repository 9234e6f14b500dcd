pub mod response {
    use crate::modules::item::repository::Item;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Item(Item),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Item(item) => (StatusCode::OK, Json(json!({ "item": item }))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchItem,
        ItemNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch item" })),
                )
                    .into_response(),
                Self::ItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Item not found" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
