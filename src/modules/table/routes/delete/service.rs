use super::types::response;
use crate::{modules::table::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, vendor_id: String, table_id: String) -> response::Response {
    repository::delete_by_id(&ctx.db_conn.pool, &vendor_id, &table_id)
        .await
        .map_err(|_| response::Error::FailedToDeleteTable)?
        .map(response::Success::TableDeleted)
        .ok_or(response::Error::TableNotFound)
}
