use super::types::response;
use crate::{modules::role::repository, types::Context, utils::pagination::Pagination};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, pagination: Pagination) -> response::Response {
    repository::find_many(&ctx.db_conn.pool, pagination)
        .await
        .map(response::Success::PaginatedRoles)
        .map_err(|_| response::Error::FailedToFetchRoles)
}
