use super::types::{request, response};
use crate::{
    modules::{
        role::{self, repository},
        user::repository::Role,
        vendor_admin,
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let current = repository::find_by_user_id(&mut *tx, &payload.user_id)
        .await
        .map_err(|_| response::Error::FailedToRevokeRole)?
        .ok_or(response::Error::UserNotFound)?;

    role::service::check_revoke(current.role, payload.role).map_err(|err| match err {
        role::service::Error::NothingToRevoke => response::Error::NothingToRevoke,
        _ => response::Error::RoleNotHeld,
    })?;

    if payload.role == Role::VendorAdmin {
        vendor_admin::repository::delete_all_for_user(&mut *tx, &payload.user_id)
            .await
            .map_err(|_| response::Error::FailedToRevokeRole)?;
    }

    repository::set(&mut *tx, &payload.user_id, Role::Customer)
        .await
        .map_err(|_| response::Error::FailedToRevokeRole)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::RoleRevoked)
}
