pub mod auth;
pub mod config;
pub mod database;
pub mod pagination;
pub mod storage;
pub mod validation;
