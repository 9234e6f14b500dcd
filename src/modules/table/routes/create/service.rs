use super::types::{request, response};
use crate::{
    modules::{
        table::{repository, service as table_service},
        vendor,
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

    let vendor_exists = vendor::repository::lock_by_id(&mut *tx, &auth.vendor_id)
        .await
        .map_err(|_| response::Error::FailedToCreateTable)?;

    if !vendor_exists {
        return Err(response::Error::VendorNotFound);
    }

    let existing = repository::count_by_vendor_id(&mut *tx, &auth.vendor_id)
        .await
        .map_err(|_| response::Error::FailedToCreateTable)?;

    table_service::check_capacity(existing).map_err(|_| response::Error::TableLimitReached)?;

    let table = repository::create(&mut *tx, &auth.vendor_id, body.name)
        .await
        .map_err(|_| response::Error::FailedToCreateTable)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::TableCreated(table))
}
