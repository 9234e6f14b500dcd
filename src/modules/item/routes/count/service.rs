use super::types::response;
use crate::{modules::item::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, vendor_id: String) -> response::Response {
    repository::count_by_vendor_id(&ctx.db_conn.pool, &vendor_id)
        .await
        .map(response::Success::ItemCount)
        .map_err(|_| response::Error::FailedToCountItems)
}
