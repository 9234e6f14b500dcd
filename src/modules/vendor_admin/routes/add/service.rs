use super::types::{request, response};
use crate::{
    modules::{
        user::{self, repository::Role},
        vendor_admin::{repository, service as vendor_admin_service},
    },
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let request::Payload { auth, body } = payload;

    body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let target = user::repository::find_by_email(&mut *tx, &body.email)
        .await
        .map_err(|_| response::Error::FailedToAddAdmin)?
        .ok_or(response::Error::UserNotFound)?;

    if target.role == Role::Admin {
        return Err(response::Error::TargetIsAdmin);
    }

    vendor_admin_service::grant(&mut tx, &target, &auth.vendor_id)
        .await
        .map_err(|err| match err {
            vendor_admin_service::Error::VendorNotFound => response::Error::VendorNotFound,
            vendor_admin_service::Error::AlreadyVendorAdmin => response::Error::AlreadyVendorAdmin,
            _ => response::Error::FailedToAddAdmin,
        })?;

    let admin = repository::find_one(&mut *tx, &auth.vendor_id, &target.id)
        .await
        .map_err(|_| response::Error::FailedToAddAdmin)?
        .ok_or(response::Error::FailedToAddAdmin)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tracing::info!(
        "User {} added {} as admin of vendor {}",
        auth.user.id,
        target.id,
        auth.vendor_id
    );

    Ok(response::Success::AdminAdded(
        admin.with_image_url(&ctx.storage),
    ))
}
