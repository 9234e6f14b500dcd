use super::types::response;
use crate::{
    modules::item::service as item_service,
    types::Context,
    utils::storage,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, vendor_id: String, item_id: String) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let (item, refreshed) = item_service::delete(&mut tx, &vendor_id, &item_id)
        .await
        .map_err(|err| match err {
            item_service::Error::ItemNotFound => response::Error::ItemNotFound,
            item_service::Error::UnexpectedError => response::Error::FailedToDeleteItem,
        })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    if let Some(path) = &item.image {
        storage::delete_image(&ctx.storage, path).await;
    }

    tracing::info!(
        "Item {} deleted, {} cart(s) refreshed",
        item.id,
        refreshed
    );

    Ok(response::Success::ItemDeleted)
}
