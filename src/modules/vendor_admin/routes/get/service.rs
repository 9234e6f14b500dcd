use super::types::response;
use crate::{modules::vendor_admin::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, vendor_id: String, user_id: String) -> response::Response {
    repository::find_one(&ctx.db_conn.pool, &vendor_id, &user_id)
        .await
        .map_err(|_| response::Error::FailedToFetchAdmin)?
        .map(|admin| response::Success::Admin(admin.with_image_url(&ctx.storage)))
        .ok_or(response::Error::AdminNotFound)
}
