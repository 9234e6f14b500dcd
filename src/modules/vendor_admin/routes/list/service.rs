use super::types::response;
use crate::{modules::vendor_admin::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, vendor_id: String) -> response::Response {
    let admins = repository::find_many_by_vendor_id(&ctx.db_conn.pool, &vendor_id)
        .await
        .map_err(|_| response::Error::FailedToFetchAdmins)?;

    Ok(response::Success::Admins(
        admins
            .into_iter()
            .map(|admin| admin.with_image_url(&ctx.storage))
            .collect(),
    ))
}
