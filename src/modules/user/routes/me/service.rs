use super::types::response;
use crate::{modules::auth::middleware::Auth, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, auth: Auth) -> response::Response {
    Ok(response::Success::User(auth.user.with_image_url(&ctx.storage)))
}
