use super::types::{request, response};
use crate::{modules::cart::service as cart_service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let request::Payload { auth, body } = payload;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let cart = cart_service::add_item(&mut tx, &auth.user.id, &body.item_id, body.quantity)
        .await
        .map_err(|err| match err {
            cart_service::Error::InvalidQuantity => response::Error::InvalidQuantity,
            cart_service::Error::NoTable => response::Error::NoTable,
            cart_service::Error::ItemNotFound => response::Error::ItemNotFound,
            cart_service::Error::InsufficientStock => response::Error::InsufficientStock,
            cart_service::Error::VendorMismatch => response::Error::VendorMismatch,
            cart_service::Error::AlreadyInCart => response::Error::AlreadyInCart,
            cart_service::Error::QuantityTooLarge => response::Error::QuantityTooLarge,
            _ => response::Error::FailedToAddItem,
        })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::ItemAdded(cart))
}
