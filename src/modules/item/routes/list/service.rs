use super::types::{request, response};
use crate::{modules::item::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let items = repository::find_many_by_vendor_id(
        &ctx.db_conn.pool,
        &payload.vendor_id,
        payload.pagination,
        payload.filters,
    )
    .await
    .map_err(|_| response::Error::FailedToFetchItems)?;

    Ok(response::Success::PaginatedItems(
        items.map(|item| item.with_image_url(&ctx.storage)),
    ))
}
