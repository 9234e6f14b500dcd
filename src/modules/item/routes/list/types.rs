pub mod request {
    use crate::{modules::item::repository, utils::pagination::Pagination};

    pub type Filters = repository::Filters;

    pub struct Payload {
        pub vendor_id: String,
        pub pagination: Pagination,
        pub filters: Filters,
    }
}

pub mod response {
    use crate::{modules::item::repository::Item, utils::pagination::Paginated};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PaginatedItems(Paginated<Item>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaginatedItems(items) => (StatusCode::OK, Json(json!(items))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchItems,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchItems => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch items" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
