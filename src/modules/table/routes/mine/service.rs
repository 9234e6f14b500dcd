use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, table::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    repository::find_by_customer_id(&ctx.db_conn.pool, &auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchTable)?
        .map(response::Success::Table)
        .ok_or(response::Error::NoTable)
}
