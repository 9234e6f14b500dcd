use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, order::repository, vendor_admin},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, id: String) -> response::Response {
    let order = repository::find_by_id(&ctx.db_conn.pool, &id)
        .await
        .map_err(|_| response::Error::FailedToDeleteOrder)?
        .ok_or(response::Error::OrderNotFound)?;

    let allowed =
        vendor_admin::service::can_manage(&ctx.db_conn.pool, &auth.user, &order.vendor_id)
            .await
            .map_err(|_| response::Error::FailedToDeleteOrder)?;

    if !allowed {
        return Err(response::Error::Forbidden);
    }

    let deleted = repository::delete_by_id(&ctx.db_conn.pool, &order.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteOrder)?;

    if !deleted {
        return Err(response::Error::OrderNotFound);
    }

    tracing::info!("Order {} deleted by {}", order.id, auth.user.id);

    Ok(response::Success::OrderDeleted)
}
