pub mod request {
    use crate::{modules::user::repository, utils::pagination::Pagination};

    pub type Filters = repository::Filters;

    pub struct Payload {
        pub pagination: Pagination,
        pub filters: Filters,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{modules::user::repository::User, utils::pagination::Paginated};

    pub enum Success {
        PaginatedUsers(Paginated<User>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaginatedUsers(users) => (StatusCode::OK, Json(json!(users))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchUsers,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchUsers => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Failed to fetch users"})),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
