use super::types::response;
use crate::{modules::role::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, id: String) -> response::Response {
    repository::find_by_user_id(&ctx.db_conn.pool, &id)
        .await
        .map_err(|_| response::Error::FailedToFetchRole)?
        .map(response::Success::Role)
        .ok_or(response::Error::UserNotFound)
}
