use super::types::response;
use crate::{
    modules::{
        auth::middleware::Auth,
        table::{repository, service as table_service},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(
    ctx: Arc<Context>,
    auth: Auth,
    vendor_id: String,
    table_id: String,
) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let table = repository::find_by_id_for_update(&mut *tx, &vendor_id, &table_id)
        .await
        .map_err(|_| response::Error::FailedToFreeTable)?
        .ok_or(response::Error::TableNotFound)?;

    table_service::check_holder(&table, &auth.user.id)
        .map_err(|_| response::Error::NotTableHolder)?;

    table_service::free(&mut tx, &table)
        .await
        .map_err(|_| response::Error::FailedToFreeTable)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(response::Success::TableFreed)
}
