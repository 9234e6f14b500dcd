use crate::modules::{user, user::repository::User, vendor_admin};
use crate::types::Context;
use crate::utils::auth;
use axum::extract::{FromRequestParts, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::RequestPartsExt;
use axum::{async_trait, Json};
use axum::{extract::Extension, http::request::Parts, response::Response};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, PartialEq)]
enum Error {
    MissingToken,
    InvalidToken,
    ExpiredToken,
    UnknownUser,
    UnexpectedError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "missing authorization token" })),
            )
                .into_response(),
            Error::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "invalid token" })),
            )
                .into_response(),
            Error::ExpiredToken => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "token has expired" })),
            )
                .into_response(),
            Error::UnknownUser => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "invalid token claims" })),
            )
                .into_response(),
            Error::UnexpectedError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Sorry an error occurred" })),
            )
                .into_response(),
        }
    }
}

fn forbidden() -> Response {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "error": "You don't have permission to access this resource" })),
    )
        .into_response()
}

async fn context_from_parts(parts: &mut Parts) -> Result<Arc<Context>, Response> {
    parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map(|Extension(ctx)| ctx)
        .map_err(|err| {
            tracing::error!("Application context missing from request: {}", err);
            Error::UnexpectedError.into_response()
        })
}

async fn get_user_from_request(ctx: Arc<Context>, parts: &mut Parts) -> Result<User, Error> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|rejection| {
            if rejection.is_missing() {
                Error::MissingToken
            } else {
                Error::InvalidToken
            }
        })?;

    let claims = auth::verify_token(&ctx.auth, bearer.token()).map_err(|err| match err {
        auth::Error::ExpiredToken => Error::ExpiredToken,
        auth::Error::InvalidToken => Error::InvalidToken,
        auth::Error::UnexpectedError => Error::UnexpectedError,
    })?;

    let user = user::repository::find_by_id(&ctx.db_conn.pool, &claims.sub)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::UnknownUser)?;

    if user.role != claims.role {
        tracing::debug!(
            "Role of user {} changed since the token was issued: {} -> {}",
            user.id,
            claims.role.to_string(),
            user.role.to_string()
        );
    }

    Ok(user)
}

/// The authenticated caller, with the role currently stored for them.
#[derive(Serialize, Clone)]
pub struct Auth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let ctx = context_from_parts(parts).await?;

        get_user_from_request(ctx, parts)
            .await
            .map(|user| Self { user })
            .map_err(IntoResponse::into_response)
    }
}

#[derive(Serialize, Clone)]
pub struct AdminAuth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let ctx = context_from_parts(parts).await?;

        let user = get_user_from_request(ctx, parts)
            .await
            .map_err(IntoResponse::into_response)?;

        if !user::repository::is_admin(&user) {
            return Err(forbidden());
        }

        Ok(Self { user })
    }
}

#[derive(Deserialize)]
struct VendorPath {
    vendor_id: String,
}

/// Caller allowed to manage the vendor named by the `vendor_id` path parameter.
#[derive(Serialize, Clone)]
pub struct VendorAuth {
    pub user: User,
    pub vendor_id: String,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for VendorAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let ctx = context_from_parts(parts).await?;

        let user = get_user_from_request(ctx.clone(), parts)
            .await
            .map_err(IntoResponse::into_response)?;

        let Path(VendorPath { vendor_id }) = parts
            .extract::<Path<VendorPath>>()
            .await
            .map_err(IntoResponse::into_response)?;

        let allowed = vendor_admin::service::can_manage(&ctx.db_conn.pool, &user, &vendor_id)
            .await
            .map_err(|_| Error::UnexpectedError.into_response())?;

        if !allowed {
            tracing::warn!(
                "User {} attempted to manage vendor {} without permission",
                user.id,
                vendor_id
            );
            return Err(forbidden());
        }

        Ok(Self { user, vendor_id })
    }
}
