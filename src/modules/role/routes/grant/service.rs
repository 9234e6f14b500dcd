use super::types::{request, response};
use crate::{
    modules::{
        role::{self, repository},
        user::{self, repository::Role},
        vendor_admin,
    },
    types::Context,
    utils::validation,
};
use std::sync::Arc;
use validator::ValidationErrors;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let request::Payload { auth, id, body } = payload;

    let vendor_id = match (body.role, body.vendor_id) {
        (Role::VendorAdmin, None) => {
            let mut errors = ValidationErrors::new();
            errors.add(
                "vendor_id",
                validation::error("REQUIRED", "is required when granting vendor admin"),
            );
            return Err(response::Error::FailedToValidate(errors));
        }
        (_, vendor_id) => vendor_id,
    };

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let target = user::repository::find_by_id(&mut *tx, &id)
        .await
        .map_err(|_| response::Error::FailedToGrantRole)?
        .ok_or(response::Error::UserNotFound)?;

    role::service::check_grant(target.role, body.role)
        .map_err(|_| response::Error::DuplicatedRole)?;

    if let (Role::VendorAdmin, Some(vendor_id)) = (body.role, &vendor_id) {
        vendor_admin::service::grant(&mut tx, &target, vendor_id)
            .await
            .map_err(|err| match err {
                vendor_admin::service::Error::VendorNotFound => response::Error::VendorNotFound,
                vendor_admin::service::Error::AlreadyVendorAdmin => {
                    response::Error::AlreadyVendorAdmin
                }
                _ => response::Error::FailedToGrantRole,
            })?;
    }

    repository::set(&mut *tx, &target.id, body.role)
        .await
        .map_err(|_| response::Error::FailedToGrantRole)?;

    let role = repository::find_by_user_id(&mut *tx, &target.id)
        .await
        .map_err(|_| response::Error::FailedToGrantRole)?
        .ok_or(response::Error::UserNotFound)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tracing::info!(
        "Admin {} granted {} to user {}",
        auth.user.id,
        body.role.to_string(),
        target.id
    );

    Ok(response::Success::RoleGranted(role))
}
