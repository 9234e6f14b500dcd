use super::types::response;
use crate::{
    modules::{
        auth::middleware::VendorAuth,
        table::{repository, service as table_service},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: VendorAuth, table_id: String) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let table = repository::find_by_id_for_update(&mut *tx, &auth.vendor_id, &table_id)
        .await
        .map_err(|_| response::Error::FailedToFreeTable)?
        .ok_or(response::Error::TableNotFound)?;

    let table = table_service::free(&mut tx, &table)
        .await
        .map_err(|_| response::Error::FailedToFreeTable)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tracing::info!("User {} freed table {}", auth.user.id, table.id);

    Ok(response::Success::TableFreed(table))
}
