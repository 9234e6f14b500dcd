use crate::types::Context;
use axum::Router;
use std::sync::Arc;

use super::{auth, cart, item, order, role, table, user, vendor, vendor_admin};

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(auth::routes::get_router())
        .merge(user::routes::get_router())
        .merge(role::routes::get_router())
        .merge(vendor::routes::get_router())
        .merge(vendor_admin::routes::get_router())
        .merge(table::routes::get_router())
        .merge(item::routes::get_router())
        .merge(cart::routes::get_router())
        .merge(order::routes::get_router())
}
