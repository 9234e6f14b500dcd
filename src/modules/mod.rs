pub mod auth;
pub mod cart;
pub mod item;
pub mod order;
pub mod role;
pub mod table;
pub mod user;
pub mod vendor;
pub mod vendor_admin;

mod router;
pub use router::get_router;
