use super::types::response;
use crate::{
    modules::{auth::middleware::Auth, cart::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    let lines = repository::find_lines(&ctx.db_conn.pool, &auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchCartItems)?;

    Ok(response::Success::CartItems(
        lines
            .into_iter()
            .map(|line| response::CartItem {
                unit_price: line.unit_price(),
                line: line.with_image_url(&ctx.storage),
            })
            .collect(),
    ))
}
