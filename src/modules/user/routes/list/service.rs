use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let users = repository::find_many(&ctx.db_conn.pool, payload.pagination, payload.filters)
        .await
        .map_err(|_| response::Error::FailedToFetchUsers)?;

    Ok(response::Success::PaginatedUsers(
        users.map(|user| user.with_image_url(&ctx.storage)),
    ))
}
