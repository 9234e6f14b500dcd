use super::types::{request, response};
use crate::{
    modules::table::{repository, service as table_service},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let table = repository::find_by_id(&ctx.db_conn.pool, &payload.vendor_id, &payload.table_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateTable)?
        .ok_or(response::Error::TableNotFound)?;

    table_service::check_holder(&table, &payload.auth.user.id)
        .map_err(|_| response::Error::NotTableHolder)?;

    repository::set_needs_service(
        &ctx.db_conn.pool,
        &table.id,
        payload.body.is_needs_service,
    )
    .await
    .map(response::Success::TableUpdated)
    .map_err(|_| response::Error::FailedToUpdateTable)
}
