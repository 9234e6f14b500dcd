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

    let target = repository::find_by_id_for_update(&mut *tx, &vendor_id, &table_id)
        .await
        .map_err(|_| response::Error::FailedToAssignTable)?
        .ok_or(response::Error::TableNotFound)?;

    let table = table_service::assign(&mut tx, &target, &auth.user.id)
        .await
        .map_err(|err| match err {
            table_service::Error::AlreadyAssigned => response::Error::AlreadyAssigned,
            table_service::Error::TableOccupied => response::Error::TableOccupied,
            _ => response::Error::FailedToAssignTable,
        })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    tracing::info!("Table {} assigned to {}", table.id, auth.user.id);

    Ok(response::Success::TableAssigned(table))
}
