pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CheckoutSuccessful(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CheckoutSuccessful(order_id) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "message": "Checkout successful",
                        "order_id": order_id
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        NoTable,
        CartEmpty,
        VendorMismatch,
        InsufficientStock(String),
        FailedToCheckoutCart,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::NoTable => (
                    StatusCode::FORBIDDEN,
                    Json(json!({ "error": "You must be seated at a table to order" })),
                )
                    .into_response(),
                Self::CartEmpty => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Your cart is empty" })),
                )
                    .into_response(),
                Self::VendorMismatch => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Your cart holds items from more than one vendor" })),
                )
                    .into_response(),
                Self::InsufficientStock(name) => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": format!("Not enough {} in stock", name) })),
                )
                    .into_response(),
                Self::FailedToCheckoutCart => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to checkout cart" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
