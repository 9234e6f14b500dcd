use super::service::service;
use crate::{modules::auth::middleware::Auth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    _: Auth,
    Path((vendor_id, item_id)): Path<(String, String)>,
) -> impl IntoResponse {
    service(ctx, vendor_id, item_id).await
}
