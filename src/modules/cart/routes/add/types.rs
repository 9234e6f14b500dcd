pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub item_id: String,
        pub quantity: i32,
    }

    pub struct Payload {
        pub auth: Auth,
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::cart::repository::Cart;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        ItemAdded(Option<Cart>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ItemAdded(cart) => {
                    (StatusCode::CREATED, Json(json!({ "cart": cart }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        InvalidQuantity,
        NoTable,
        ItemNotFound,
        InsufficientStock,
        VendorMismatch,
        AlreadyInCart,
        QuantityTooLarge,
        FailedToAddItem,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidQuantity => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Quantity must be greater than zero" })),
                )
                    .into_response(),
                Self::NoTable => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You must be seated at a table to order" })),
                )
                    .into_response(),
                Self::ItemNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Item not found" })),
                )
                    .into_response(),
                Self::InsufficientStock => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Not enough items in stock" })),
                )
                    .into_response(),
                Self::VendorMismatch => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Your cart holds items from another vendor" })),
                )
                    .into_response(),
                Self::AlreadyInCart => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Item is already in your cart" })),
                )
                    .into_response(),
                Self::QuantityTooLarge => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Quantity is too large" })),
                )
                    .into_response(),
                Self::FailedToAddItem => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to add item to cart" })),
                )
                    .into_response(),
                Self::UnexpectedError => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sorry an error occurred" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
