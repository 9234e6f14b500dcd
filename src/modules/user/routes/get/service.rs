use super::types::response;
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, id: String) -> response::Response {
    repository::find_by_id(&ctx.db_conn.pool, &id)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .map(|user| response::Success::User(user.with_image_url(&ctx.storage)))
        .ok_or(response::Error::UserNotFound)
}
