use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, user, vendor},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth, id: String) -> response::Response {
    if auth.user.id != id && !user::repository::is_admin(&auth.user) {
        return Err(response::Error::Forbidden);
    }

    let vendors = vendor::repository::find_many_by_admin_id(&ctx.db_conn.pool, &id)
        .await
        .map_err(|_| response::Error::FailedToFetchVendors)?;

    Ok(response::Success::Vendors(
        vendors
            .into_iter()
            .map(|vendor| vendor.with_image_url(&ctx.storage))
            .collect(),
    ))
}
