use super::types::{request, response};
use crate::{modules::user, types::Context, utils::auth};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let user = user::repository::find_by_email(&ctx.db_conn.pool, &payload.email)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !auth::verify_password(&payload.password, &user.password_hash) {
        tracing::warn!("Failed sign in attempt for user {}", user.id);
        return Err(response::Error::InvalidCredentials);
    }

    let issued = auth::issue_token(&ctx.auth, &user.id, user.role)
        .map_err(|_| response::Error::FailedToIssueToken)?;

    Ok(response::Success::SignedIn {
        token: issued.token,
        expires: issued.expires,
    })
}
