use super::types::response;
use crate::{
    modules::{
        auth::middleware::Auth,
        order::{repository, service as order_service},
        vendor_admin,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, id: String) -> response::Response {
    let order = repository::find_by_id(&ctx.db_conn.pool, &id)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    let allowed =
        vendor_admin::service::can_manage(&ctx.db_conn.pool, &auth.user, &order.vendor_id)
            .await
            .map_err(|_| response::Error::FailedToUpdateOrder)?;

    if !allowed {
        return Err(response::Error::Forbidden);
    }

    order_service::check_completable(order.status)
        .map_err(|_| response::Error::AlreadyCompleted)?;

    let order = repository::complete(&ctx.db_conn.pool, &order.id)
        .await
        .map_err(|_| response::Error::FailedToUpdateOrder)?
        .ok_or(response::Error::AlreadyCompleted)?;

    tracing::info!("Order {} completed by {}", order.id, auth.user.id);

    Ok(response::Success::OrderCompleted(order))
}
