use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::VendorAuth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use axum_typed_multipart::TypedMultipart;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: VendorAuth,
    Path((_, item_id)): Path<(String, String)>,
    TypedMultipart(body): TypedMultipart<request::Body>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            auth,
            item_id,
            body,
        },
    )
    .await
}
