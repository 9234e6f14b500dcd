use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, cart::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    repository::find_by_id(&ctx.db_conn.pool, &auth.user.id)
        .await
        .map(response::Success::Cart)
        .map_err(|_| response::Error::FailedToFetchCart)
}
