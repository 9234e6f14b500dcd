use super::service::service;
use crate::{modules::auth::middleware::VendorAuth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: VendorAuth,
    Path((_, item_id)): Path<(String, String)>,
) -> impl IntoResponse {
    service(ctx, auth.vendor_id, item_id).await
}
