use super::service::service;
use crate::{modules::auth::middleware::Auth, types::Context};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    Path((vendor_id, table_id)): Path<(String, String)>,
) -> impl IntoResponse {
    service(ctx, auth, vendor_id, table_id).await
}
