use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::Auth, types::Context};
use axum::{
    extract::{Json, Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    Path((vendor_id, table_id)): Path<(String, String)>,
    Json(body): Json<request::Body>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            auth,
            vendor_id,
            table_id,
            body,
        },
    )
    .await
}
