use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::VendorAuth, types::Context};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: VendorAuth,
    Path((_, table_id)): Path<(String, String)>,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            vendor_id: auth.vendor_id,
            table_id,
            body,
        },
    )
    .await
}
