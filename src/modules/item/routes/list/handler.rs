use super::service::service;
use super::types::request;
use crate::{modules::auth::middleware::Auth, types::Context, utils::pagination::Pagination};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    _: Auth,
    pagination: Pagination,
    State(ctx): State<Arc<Context>>,
    Path(vendor_id): Path<String>,
    Query(filters): Query<request::Filters>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            vendor_id,
            pagination,
            filters,
        },
    )
    .await
}
