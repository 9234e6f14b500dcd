use super::types::response;
use crate::{modules::item::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, vendor_id: String, item_id: String) -> response::Response {
    repository::find_by_vendor_id_and_id(&ctx.db_conn.pool, &vendor_id, &item_id)
        .await
        .map_err(|_| response::Error::FailedToFetchItem)?
        .map(|item| response::Success::Item(item.with_image_url(&ctx.storage)))
        .ok_or(response::Error::ItemNotFound)
}
