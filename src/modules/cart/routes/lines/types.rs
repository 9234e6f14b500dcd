pub mod response {
    use crate::modules::cart::repository::CartLine;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use bigdecimal::BigDecimal;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    pub struct CartItem {
        #[serde(flatten)]
        pub line: CartLine,
        pub unit_price: BigDecimal,
    }

    pub enum Success {
        CartItems(Vec<CartItem>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CartItems(items) => {
                    (StatusCode::OK, Json(json!({ "cart_items": items }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchCartItems,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchCartItems => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch cart items" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
