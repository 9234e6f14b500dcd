use crate::utils::database;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub vendor_id: String,
    pub customer_id: Option<String>,
    pub is_available: bool,
    pub is_needs_service: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    AlreadyAssigned,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create<'e, E: PgExecutor<'e>>(e: E, vendor_id: &str, name: String) -> Result<Table> {
    sqlx::query_as::<_, Table>(
        "
        INSERT INTO tables (id, name, vendor_id)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(name)
    .bind(vendor_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create a table for vendor {}: {}",
            vendor_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn count_by_vendor_id<'e, E: PgExecutor<'e>>(e: E, vendor_id: &str) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tables WHERE vendor_id = $1")
        .bind(vendor_id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting tables of vendor {}: {}", vendor_id, err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_vendor_id<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
) -> Result<Vec<Table>> {
    sqlx::query_as::<_, Table>(
        "SELECT * FROM tables WHERE vendor_id = $1 ORDER BY name ASC, id ASC",
    )
    .bind(vendor_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching tables of vendor {}: {}", vendor_id, err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
    id: &str,
) -> Result<Option<Table>> {
    sqlx::query_as::<_, Table>("SELECT * FROM tables WHERE id = $1 AND vendor_id = $2")
        .bind(id)
        .bind(vendor_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching table {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Locks the row until the surrounding transaction ends.
pub async fn find_by_id_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
    id: &str,
) -> Result<Option<Table>> {
    sqlx::query_as::<_, Table>(
        "SELECT * FROM tables WHERE id = $1 AND vendor_id = $2 FOR UPDATE",
    )
    .bind(id)
    .bind(vendor_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while locking table {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn find_by_customer_id<'e, E: PgExecutor<'e>>(
    e: E,
    customer_id: &str,
) -> Result<Option<Table>> {
    sqlx::query_as::<_, Table>("SELECT * FROM tables WHERE customer_id = $1")
        .bind(customer_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching the table held by {}: {}",
                customer_id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn rename<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
    id: &str,
    name: String,
) -> Result<Option<Table>> {
    sqlx::query_as::<_, Table>(
        "
        UPDATE tables SET name = $3, updated_at = NOW()
        WHERE id = $1 AND vendor_id = $2
        RETURNING *
        ",
    )
    .bind(id)
    .bind(vendor_id)
    .bind(name)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while renaming table {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
    id: &str,
) -> Result<Option<Table>> {
    sqlx::query_as::<_, Table>(
        "DELETE FROM tables WHERE id = $1 AND vendor_id = $2 RETURNING *",
    )
    .bind(id)
    .bind(vendor_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while deleting table {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn assign<'e, E: PgExecutor<'e>>(e: E, id: &str, customer_id: &str) -> Result<Table> {
    sqlx::query_as::<_, Table>(
        "
        UPDATE tables SET
            customer_id = $2,
            is_available = FALSE,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(customer_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::AlreadyAssigned;
        }
        tracing::error!(
            "Error occurred while assigning table {} to {}: {}",
            id,
            customer_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn set_needs_service<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
    needs_service: bool,
) -> Result<Table> {
    sqlx::query_as::<_, Table>(
        "
        UPDATE tables SET is_needs_service = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(needs_service)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while updating the service flag of table {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn free<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Table> {
    sqlx::query_as::<_, Table>(
        "
        UPDATE tables SET
            customer_id = NULL,
            is_available = TRUE,
            is_needs_service = FALSE,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while freeing table {}: {}", id, err);
        Error::UnexpectedError
    })
}
