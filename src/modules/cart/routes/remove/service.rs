use super::types::{request, response};
use crate::{modules::cart::service as cart_service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let cart = cart_service::remove_item(
        &mut tx,
        &payload.auth.user.id,
        &payload.item_id,
        payload.quantity,
    )
    .await
    .map_err(|err| match err {
        cart_service::Error::InvalidQuantity => response::Error::InvalidQuantity,
        cart_service::Error::RemovingMoreThanInCart => response::Error::RemovingMoreThanInCart,
        cart_service::Error::CartNotFound => response::Error::CartNotFound,
        cart_service::Error::NotInCart => response::Error::NotInCart,
        cart_service::Error::QuantityTooLarge => response::Error::QuantityTooLarge,
        _ => response::Error::FailedToRemoveItem,
    })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::ItemRemoved(cart))
}
