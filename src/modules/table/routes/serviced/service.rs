use super::types::response;
use crate::{modules::table::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, vendor_id: String, table_id: String) -> response::Response {
    let table = repository::find_by_id(&ctx.db_conn.pool, &vendor_id, &table_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateTable)?
        .ok_or(response::Error::TableNotFound)?;

    repository::set_needs_service(&ctx.db_conn.pool, &table.id, false)
        .await
        .map(response::Success::TableServiced)
        .map_err(|_| response::Error::FailedToUpdateTable)
}
