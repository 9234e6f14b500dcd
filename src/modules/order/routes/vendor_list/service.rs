use super::types::response;
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, vendor_id: String) -> response::Response {
    let orders = repository::find_many_by_vendor_id(&ctx.db_conn.pool, &vendor_id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)?;

    repository::with_items(&ctx.db_conn.pool, orders)
        .await
        .map(response::Success::Orders)
        .map_err(|_| response::Error::FailedToFetchOrders)
}
