use crate::modules::cart::repository::CartLine;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
pub enum OrderStatus {
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "completed")]
    Completed,
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Order {
    pub id: String,
    pub total_order_cost: BigDecimal,
    pub customer_id: String,
    pub vendor_id: String,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A line of an order, priced at checkout time.
#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub item_id: Option<String>,
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Clone, Debug)]
pub struct FullOrder {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    customer_id: &str,
    vendor_id: &str,
    total_order_cost: BigDecimal,
) -> Result<Order> {
    sqlx::query_as::<_, Order>(
        "
        INSERT INTO orders (id, total_order_cost, customer_id, vendor_id, status)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(total_order_cost)
    .bind(customer_id)
    .bind(vendor_id)
    .bind(OrderStatus::Preparing)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an order: {}", err);
        Error::UnexpectedError
    })
}

pub async fn create_item<'e, E: PgExecutor<'e>>(
    e: E,
    order_id: &str,
    line: &CartLine,
) -> Result<OrderItem> {
    sqlx::query_as::<_, OrderItem>(
        "
        INSERT INTO order_items (id, order_id, item_id, name, price, quantity)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(order_id)
    .bind(&line.item_id)
    .bind(&line.name)
    .bind(line.unit_price())
    .bind(line.quantity)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while adding item {} to order {}: {}",
            line.item_id,
            order_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch order by id: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_many_by_customer_id<'e, E: PgExecutor<'e>>(
    e: E,
    customer_id: &str,
) -> Result<Vec<Order>> {
    sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE customer_id = $1 ORDER BY created_at DESC, id DESC",
    )
    .bind(customer_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching orders of customer {}: {}",
            customer_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_many_by_vendor_id<'e, E: PgExecutor<'e>>(
    e: E,
    vendor_id: &str,
) -> Result<Vec<Order>> {
    sqlx::query_as::<_, Order>(
        "SELECT * FROM orders WHERE vendor_id = $1 ORDER BY created_at ASC, id ASC",
    )
    .bind(vendor_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching orders of vendor {}: {}",
            vendor_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_items_by_order_ids<'e, E: PgExecutor<'e>>(
    e: E,
    order_ids: &[String],
) -> Result<Vec<OrderItem>> {
    sqlx::query_as::<_, OrderItem>(
        "
        SELECT * FROM order_items
        WHERE order_id = ANY($1)
        ORDER BY created_at ASC, id ASC
        ",
    )
    .bind(order_ids)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching order items: {}", err);
        Error::UnexpectedError
    })
}

/// Fetches the items of every order and pairs them up, keeping the order of `orders`.
pub async fn with_items<'e, E: PgExecutor<'e>>(e: E, orders: Vec<Order>) -> Result<Vec<FullOrder>> {
    let order_ids = orders.iter().map(|order| order.id.clone()).collect::<Vec<_>>();
    let items = find_items_by_order_ids(e, &order_ids).await?;

    Ok(attach_items(orders, items))
}

pub fn attach_items(orders: Vec<Order>, items: Vec<OrderItem>) -> Vec<FullOrder> {
    let mut items_by_order = items
        .into_iter()
        .into_group_map_by(|item| item.order_id.clone());

    orders
        .into_iter()
        .map(|order| FullOrder {
            items: items_by_order.remove(&order.id).unwrap_or_default(),
            order,
        })
        .collect()
}

/// Moves a preparing order to completed. `None` when no preparing order has this id.
pub async fn complete<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<Order>> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE orders SET status = $2, updated_at = NOW()
        WHERE id = $1 AND status = $3
        RETURNING *
        ",
    )
    .bind(id)
    .bind(OrderStatus::Completed)
    .bind(OrderStatus::Preparing)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while completing order {}: {}", id, err);
        Error::UnexpectedError
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<bool> {
    sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Error occurred while deleting order {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn delete_by_customer_id<'e, E: PgExecutor<'e>>(e: E, customer_id: &str) -> Result<u64> {
    sqlx::query("DELETE FROM orders WHERE customer_id = $1")
        .bind(customer_id)
        .execute(e)
        .await
        .map(|result| result.rows_affected())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while deleting orders of customer {}: {}",
                customer_id,
                err
            );
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            total_order_cost: BigDecimal::from(10),
            customer_id: String::from("customer"),
            vendor_id: String::from("vendor"),
            status: OrderStatus::Preparing,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    fn order_item(id: &str, order_id: &str) -> OrderItem {
        OrderItem {
            id: id.to_string(),
            order_id: order_id.to_string(),
            item_id: None,
            name: String::from("Tea"),
            price: BigDecimal::from(5),
            quantity: 2,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn items_are_grouped_under_their_order() {
        let full = attach_items(
            vec![order("o1"), order("o2"), order("o3")],
            vec![
                order_item("i1", "o2"),
                order_item("i2", "o1"),
                order_item("i3", "o2"),
            ],
        );

        let ids = full
            .iter()
            .map(|full| (full.order.id.as_str(), full.items.len()))
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![("o1", 1), ("o2", 2), ("o3", 0)]);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Completed).unwrap(),
            serde_json::json!("completed")
        );
    }
}
