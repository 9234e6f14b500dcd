use super::types::{request, response};
use crate::{
    modules::item::{repository, service as item_service},
    types::Context,
    utils::storage::{self, Folder},
};
use chrono::Utc;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let request::Payload { auth, body } = payload;

    let fields = item_service::resolve(
        None,
        item_service::ItemInput {
            name: Some(body.name),
            price: Some(body.price),
            discount: body.discount,
            discount_days: body.discount_days,
            quantity: Some(body.quantity),
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

    match repository::create(&ctx.db_conn.pool, &auth.vendor_id, fields, image.clone()).await {
        Ok(item) => Ok(response::Success::ItemCreated(
            item.with_image_url(&ctx.storage),
        )),
        Err(_) => {
            if let Some(path) = image {
                storage::delete_image(&ctx.storage, &path).await;
            }
            Err(response::Error::FailedToCreateItem)
        }
    }
}
