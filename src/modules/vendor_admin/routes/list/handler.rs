use super::service::service;
use crate::{modules::auth::middleware::VendorAuth, types::Context};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, auth: VendorAuth) -> impl IntoResponse {
    service(ctx, auth.vendor_id).await
}
