use crate::{
    types::StorageContext,
    utils::{database, storage},
};
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

/// A customer's cart, keyed by the customer's id.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Cart {
    pub id: String,
    pub vendor_id: String,
    pub total_price: BigDecimal,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A cart item joined with the item it points at.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct CartLine {
    pub item_id: String,
    pub vendor_id: String,
    pub name: String,
    pub price: BigDecimal,
    pub discount: BigDecimal,
    pub image: Option<String>,
    pub quantity: i32,
    pub stock: i32,
}

impl CartLine {
    pub fn with_image_url(mut self, cfg: &StorageContext) -> Self {
        self.image = self.image.map(|path| storage::public_url(cfg, &path));
        self
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    AlreadyInCart,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create<'e, E: PgExecutor<'e>>(e: E, customer_id: &str, vendor_id: &str) -> Result<Cart> {
    sqlx::query_as::<_, Cart>(
        "
        INSERT INTO carts (id, vendor_id)
        VALUES ($1, $2)
        RETURNING *
        ",
    )
    .bind(customer_id)
    .bind(vendor_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a cart for {}: {}", customer_id, err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Cart>> {
    sqlx::query_as::<_, Cart>("SELECT * FROM carts WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching cart {}: {}", id, err);
            Error::UnexpectedError
        })
}

/// Locks the cart until the surrounding transaction ends.
pub async fn find_by_id_for_update<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Cart>> {
    sqlx::query_as::<_, Cart>("SELECT * FROM carts WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while locking cart {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_lines<'e, E: PgExecutor<'e>>(e: E, cart_id: &str) -> Result<Vec<CartLine>> {
    sqlx::query_as::<_, CartLine>(
        "
        SELECT
            cart_items.item_id,
            items.vendor_id,
            items.name,
            items.price,
            items.discount,
            items.image,
            cart_items.quantity,
            items.quantity AS stock
        FROM cart_items
        INNER JOIN items ON items.id = cart_items.item_id
        WHERE cart_items.cart_id = $1
        ORDER BY cart_items.created_at ASC, cart_items.item_id ASC
        ",
    )
    .bind(cart_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching lines of cart {}: {}", cart_id, err);
        Error::UnexpectedError
    })
}

pub async fn find_item_quantity<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: &str,
    item_id: &str,
) -> Result<Option<i32>> {
    sqlx::query_scalar::<_, i32>(
        "SELECT quantity FROM cart_items WHERE cart_id = $1 AND item_id = $2",
    )
    .bind(cart_id)
    .bind(item_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching cart item {}: {}", item_id, err);
        Error::UnexpectedError
    })
}

pub async fn add_item<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: &str,
    item_id: &str,
    quantity: i32,
) -> Result<()> {
    sqlx::query("INSERT INTO cart_items (cart_id, item_id, quantity) VALUES ($1, $2, $3)")
        .bind(cart_id)
        .bind(item_id)
        .bind(quantity)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            if database::is_unique_violation(&err) {
                return Error::AlreadyInCart;
            }
            tracing::error!("Error occurred while adding item {} to cart: {}", item_id, err);
            Error::UnexpectedError
        })
}

pub async fn set_item_quantity<'e, E: PgExecutor<'e>>(
    e: E,
    cart_id: &str,
    item_id: &str,
    quantity: i32,
) -> Result<()> {
    sqlx::query("UPDATE cart_items SET quantity = $3 WHERE cart_id = $1 AND item_id = $2")
        .bind(cart_id)
        .bind(item_id)
        .bind(quantity)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while updating cart item {}: {}", item_id, err);
            Error::UnexpectedError
        })
}

pub async fn remove_item<'e, E: PgExecutor<'e>>(e: E, cart_id: &str, item_id: &str) -> Result<()> {
    sqlx::query("DELETE FROM cart_items WHERE cart_id = $1 AND item_id = $2")
        .bind(cart_id)
        .bind(item_id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while removing cart item {}: {}", item_id, err);
            Error::UnexpectedError
        })
}

pub async fn update_totals<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
    total_price: BigDecimal,
    quantity: i32,
) -> Result<Cart> {
    sqlx::query_as::<_, Cart>(
        "
        UPDATE carts SET total_price = $2, quantity = $3, updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id)
    .bind(total_price)
    .bind(quantity)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while updating totals of cart {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<()> {
    sqlx::query("DELETE FROM carts WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!("Error occurred while deleting cart {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_ids_by_item_id<'e, E: PgExecutor<'e>>(e: E, item_id: &str) -> Result<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        "SELECT cart_id FROM cart_items WHERE item_id = $1 ORDER BY cart_id",
    )
    .bind(item_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching carts holding item {}: {}", item_id, err);
        Error::UnexpectedError
    })
}

/// Locks the given carts in id order.
pub async fn lock_many<'e, E: PgExecutor<'e>>(e: E, ids: &[String]) -> Result<()> {
    sqlx::query_scalar::<_, String>(
        "SELECT id FROM carts WHERE id = ANY($1) ORDER BY id FOR UPDATE",
    )
    .bind(ids)
    .fetch_all(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Error occurred while locking {} cart(s): {}", ids.len(), err);
        Error::UnexpectedError
    })
}
