use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, order::service as order_service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCheckoutCart
    })?;

    // dropping the transaction on error rolls every write back
    let order = order_service::checkout(&mut tx, &auth.user.id)
        .await
        .map_err(|err| match err {
            order_service::Error::NoTable => response::Error::NoTable,
            order_service::Error::CartEmpty => response::Error::CartEmpty,
            order_service::Error::VendorMismatch => response::Error::VendorMismatch,
            order_service::Error::InsufficientStock(name) => {
                response::Error::InsufficientStock(name)
            }
            _ => response::Error::FailedToCheckoutCart,
        })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit transaction: {}", err);
        response::Error::FailedToCheckoutCart
    })?;

    tracing::info!("Customer {} placed order {}", auth.user.id, order.id);

    Ok(response::Success::CheckoutSuccessful(order.id))
}
