use crate::{
    types::StorageContext,
    utils::{
        pagination::{Paginated, Pagination},
        storage,
    },
};
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Item {
    pub id: String,
    pub vendor_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub discount: BigDecimal,
    pub discount_expiry: Option<NaiveDateTime>,
    pub quantity: i32,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Item {
    pub fn with_image_url(mut self, cfg: &StorageContext) -> Self {
        self.image = self.image.map(|path| storage::public_url(cfg, &path));
        self
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

/// Every column a vendor controls, already validated.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub price: BigDecimal,
    pub discount: BigDecimal,
    pub discount_expiry: Option<NaiveDateTime>,
    pub quantity: i32,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
    fields: ItemFields,
    image: Option<String>,
) -> Result<Item> {
    sqlx::query_as::<_, Item>(
        "
        INSERT INTO items
            (id, vendor_id, name, price, discount, discount_expiry, quantity, image)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(vendor_id)
    .bind(fields.name)
    .bind(fields.price)
    .bind(fields.discount)
    .bind(fields.discount_expiry)
    .bind(fields.quantity)
    .bind(image)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an item: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Item>> {
    sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching item {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_vendor_id_and_id<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
    id: &str,
) -> Result<Option<Item>> {
    sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1 AND vendor_id = $2")
        .bind(id)
        .bind(vendor_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching item {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Holds the item's price and stock steady until the surrounding transaction ends.
pub async fn find_by_id_for_share<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Item>> {
    sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1 FOR SHARE")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while locking item {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_vendor_id_and_id_for_update<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
    id: &str,
) -> Result<Option<Item>> {
    sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1 AND vendor_id = $2 FOR UPDATE")
        .bind(id)
        .bind(vendor_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while locking item {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Locks the given items in id order.
pub async fn lock_many<'e, E: PgExecutor<'e>>(e: E, ids: &[String]) -> Result<()> {
    sqlx::query_scalar::<_, String>(
        "SELECT id FROM items WHERE id = ANY($1) ORDER BY id FOR UPDATE",
    )
    .bind(ids)
    .fetch_all(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Error occurred while locking {} item(s): {}", ids.len(), err);
        Error::UnexpectedError
    })
}

#[derive(Deserialize, Debug, Default)]
pub struct Filters {
    pub search: Option<String>,
}

pub async fn find_many_by_vendor_id<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    vendor_id: &str,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<Item>> {
    let items = sqlx::query_as::<_, Item>(
        "
        SELECT * FROM items
        WHERE
            vendor_id = $1
            AND name ILIKE CONCAT('%', COALESCE($2, ''), '%')
        ORDER BY name ASC, id ASC
        LIMIT $3
        OFFSET $4
        ",
    )
    .bind(vendor_id)
    .bind(filters.search.clone())
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many items: {}", err);
        Error::UnexpectedError
    })?;

    let total = sqlx::query_scalar::<_, i64>(
        "
        SELECT COUNT(*) FROM items
        WHERE
            vendor_id = $1
            AND name ILIKE CONCAT('%', COALESCE($2, ''), '%')
        ",
    )
    .bind(vendor_id)
    .bind(filters.search)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to count items: {}", err);
        Error::UnexpectedError
    })?;

    Ok(Paginated::new(
        items,
        total as u32,
        pagination.page,
        pagination.per_page,
    ))
}

pub async fn count_by_vendor_id<'e, E: PgExecutor<'e>>(e: E, vendor_id: &str) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items WHERE vendor_id = $1")
        .bind(vendor_id)
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while counting items of vendor {}: {}", vendor_id, err);
            Error::UnexpectedError
        })
}

/// Overwrites every vendor-controlled column; the image is only replaced when a new one is given.
pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
    fields: ItemFields,
    image: Option<String>,
) -> Result<Option<Item>> {
    sqlx::query_as::<_, Item>(
        "
        UPDATE items SET
            name = $2,
            price = $3,
            discount = $4,
            discount_expiry = $5,
            quantity = $6,
            image = COALESCE($7, image),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(fields.name)
    .bind(fields.price)
    .bind(fields.discount)
    .bind(fields.discount_expiry)
    .bind(fields.quantity)
    .bind(image)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to update item {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Item>> {
    sqlx::query_as::<_, Item>("DELETE FROM items WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to delete item {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Takes `quantity` units out of stock unless that would leave it negative.
/// Returns whether the stock was taken.
pub async fn take_stock<'e, E: PgExecutor<'e>>(e: E, id: &str, quantity: i32) -> Result<bool> {
    sqlx::query(
        "
        UPDATE items SET quantity = quantity - $2, updated_at = NOW()
        WHERE id = $1 AND quantity >= $2
        ",
    )
    .bind(id)
    .bind(quantity)
    .execute(e)
    .await
    .map(|result| result.rows_affected() == 1)
    .map_err(|err| {
        tracing::error!("Error occurred while taking stock of item {}: {}", id, err);
        Error::UnexpectedError
    })
}
