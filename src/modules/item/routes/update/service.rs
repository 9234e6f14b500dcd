use super::types::{request, response};
use crate::{
    modules::item::{repository, service as item_service},
    types::Context,
    utils::storage::{self, Folder},
};
use chrono::Utc;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let request::Payload {
        auth,
        item_id,
        body,
    } = payload;

    let existing = repository::find_by_vendor_id_and_id(&ctx.db_conn.pool, &auth.vendor_id, &item_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateItem)?
        .ok_or(response::Error::ItemNotFound)?;

    let fields = item_service::resolve(
        Some(&existing),
        item_service::ItemInput {
            name: body.name,
            price: body.price,
            discount: body.discount,
            discount_days: body.discount_days,
            quantity: body.quantity,
        },
        Utc::now().naive_utc(),
    )
    .map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let image = storage::save_optional_image(&ctx.storage, Folder::Items, body.image)
        .await
        .map_err(|err| match err {
            storage::Error::InvalidImage => response::Error::InvalidImage,
            storage::Error::UploadFailed => response::Error::ImageUploadFailed,
        })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let persisted = item_service::update(&mut tx, &auth.vendor_id, &existing.id, fields, image.clone())
        .await
        .map_err(|err| match err {
            item_service::Error::ItemNotFound => response::Error::ItemNotFound,
            item_service::Error::UnexpectedError => response::Error::FailedToUpdateItem,
        });

    let updated = match persisted {
        Ok(item) => tx.commit().await.map(|_| item).map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::UnexpectedError
        }),
        Err(err) => Err(err),
    };

    let item = match updated {
        Ok(item) => item,
        Err(err) => {
            if let Some(path) = &image {
                storage::delete_image(&ctx.storage, path).await;
            }
            return Err(err);
        }
    };

    if let (Some(_), Some(old_image)) = (&image, &existing.image) {
        storage::delete_image(&ctx.storage, old_image).await;
    }

    Ok(response::Success::ItemUpdated(
        item.with_image_url(&ctx.storage),
    ))
}
