use super::types::{request, response};
use crate::{modules::table::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    repository::rename(
        &ctx.db_conn.pool,
        &payload.vendor_id,
        &payload.table_id,
        payload.body.name,
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateTable)?
    .map(response::Success::TableUpdated)
    .ok_or(response::Error::TableNotFound)
}
