use crate::{
    types::StorageContext,
    utils::{database, storage},
};
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::PgExecutor;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct VendorAdmin {
    pub user_id: String,
    pub vendor_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
}

impl VendorAdmin {
    pub fn with_image_url(mut self, cfg: &StorageContext) -> Self {
        self.image = self.image.map(|path| storage::public_url(cfg, &path));
        self
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    AlreadyExists,
    MissingReference,
}

type Result<T> = std::result::Result<T, Error>;

const SELECT_VENDOR_ADMIN: &str = "
    SELECT
        vendor_admins.user_id,
        vendor_admins.vendor_id,
        users.name,
        users.email,
        users.phone,
        users.image,
        vendor_admins.created_at
    FROM vendor_admins
    INNER JOIN users ON users.id = vendor_admins.user_id
";

pub async fn create<'e, E: PgExecutor<'e>>(e: E, user_id: &str, vendor_id: &str) -> Result<()> {
    sqlx::query("INSERT INTO vendor_admins (user_id, vendor_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(vendor_id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            if database::is_unique_violation(&err) {
                return Error::AlreadyExists;
            }
            if database::is_foreign_key_violation(&err) {
                return Error::MissingReference;
            }
            tracing::error!(
                "Error occurred while granting user {} access to vendor {}: {}",
                user_id,
                vendor_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete<'e, E: PgExecutor<'e>>(e: E, user_id: &str, vendor_id: &str) -> Result<bool> {
    sqlx::query("DELETE FROM vendor_admins WHERE user_id = $1 AND vendor_id = $2")
        .bind(user_id)
        .bind(vendor_id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!(
                "Error occurred while revoking user {} access to vendor {}: {}",
                user_id,
                vendor_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn delete_all_for_user<'e, E: PgExecutor<'e>>(e: E, user_id: &str) -> Result<u64> {
    sqlx::query("DELETE FROM vendor_admins WHERE user_id = $1")
        .bind(user_id)
        .execute(e)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while revoking all vendor access of user {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn exists<'e, E: PgExecutor<'e>>(e: E, user_id: &str, vendor_id: &str) -> Result<bool> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM vendor_admins WHERE user_id = $1 AND vendor_id = $2)",
    )
    .bind(user_id)
    .bind(vendor_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while checking vendor access: {}", err);
        Error::UnexpectedError
    })
}

pub async fn count_for_user<'e, E: PgExecutor<'e>>(e: E, user_id: &str) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vendor_admins WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while counting vendors of user {}: {}",
                user_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_many_by_vendor_id<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
) -> Result<Vec<VendorAdmin>> {
    sqlx::query_as::<_, VendorAdmin>(&format!(
        "{SELECT_VENDOR_ADMIN} WHERE vendor_admins.vendor_id = $1 ORDER BY vendor_admins.created_at ASC"
    ))
    .bind(vendor_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching admins of vendor {}: {}",
            vendor_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_one<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
    user_id: &str,
) -> Result<Option<VendorAdmin>> {
    sqlx::query_as::<_, VendorAdmin>(&format!(
        "{SELECT_VENDOR_ADMIN} WHERE vendor_admins.vendor_id = $1 AND vendor_admins.user_id = $2"
    ))
    .bind(vendor_id)
    .bind(user_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching vendor admin: {}", err);
        Error::UnexpectedError
    })
}
