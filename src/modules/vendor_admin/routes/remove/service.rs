use super::types::response;
use crate::{
    modules::{auth::middleware::VendorAuth, user, vendor_admin::service as vendor_admin_service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: VendorAuth, user_id: String) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let target = user::repository::find_by_id(&mut *tx, &user_id)
        .await
        .map_err(|_| response::Error::FailedToRemoveAdmin)?
        .ok_or(response::Error::AdminNotFound)?;

    vendor_admin_service::revoke(&mut tx, &target, &auth.vendor_id)
        .await
        .map_err(|err| match err {
            vendor_admin_service::Error::NotVendorAdmin => response::Error::AdminNotFound,
            _ => response::Error::FailedToRemoveAdmin,
        })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tracing::info!(
        "User {} removed {} from the admins of vendor {}",
        auth.user.id,
        target.id,
        auth.vendor_id
    );

    Ok(response::Success::AdminRemoved)
}
