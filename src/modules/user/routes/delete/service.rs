use super::types::response;
use crate::{modules::user::repository, types::Context, utils::storage};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, id: String) -> response::Response {
    let image = repository::delete_by_id(&ctx.db_conn.pool, &id)
        .await
        .map_err(|_| response::Error::FailedToDeleteUser)?
        .ok_or(response::Error::UserNotFound)?;

    if let Some(path) = image {
        storage::delete_image(&ctx.storage, &path).await;
    }

    tracing::info!("User {} deleted", id);

    Ok(response::Success::UserDeleted)
}
