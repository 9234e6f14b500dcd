use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, order::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    let orders = repository::find_many_by_customer_id(&ctx.db_conn.pool, &auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)?;

    repository::with_items(&ctx.db_conn.pool, orders)
        .await
        .map(response::Success::Orders)
        .map_err(|_| response::Error::FailedToFetchOrders)
}
