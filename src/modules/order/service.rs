use super::repository::{self, Order, OrderStatus};
use crate::modules::{
    cart::{self, repository::CartLine},
    item, table,
};
use sqlx::PgConnection;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    NoTable,
    CartEmpty,
    VendorMismatch,
    InsufficientStock(String),
    AlreadyCompleted,
}

/// Every line must come from the cart's vendor.
pub fn check_lines(vendor_id: &str, lines: &[CartLine]) -> Result<(), Error> {
    if lines.is_empty() {
        return Err(Error::CartEmpty);
    }
    if lines.iter().any(|line| line.vendor_id != vendor_id) {
        return Err(Error::VendorMismatch);
    }
    Ok(())
}

pub fn check_completable(status: OrderStatus) -> Result<(), Error> {
    match status {
        OrderStatus::Preparing => Ok(()),
        OrderStatus::Completed => Err(Error::AlreadyCompleted),
    }
}

/// Turns the customer's cart into an order.
///
/// Must run inside a transaction: any error leaves partial writes behind that
/// only a rollback removes.
pub async fn checkout(conn: &mut PgConnection, customer_id: &str) -> Result<Order, Error> {
    table::repository::find_by_customer_id(&mut *conn, customer_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::NoTable)?;

    // items before the cart, the order every repricing takes
    let item_ids = cart::repository::find_lines(&mut *conn, customer_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .into_iter()
        .map(|line| line.item_id)
        .collect::<Vec<_>>();

    item::repository::lock_many(&mut *conn, &item_ids)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    let cart = cart::repository::find_by_id_for_update(&mut *conn, customer_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::CartEmpty)?;

    let lines = cart::repository::find_lines(&mut *conn, &cart.id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    check_lines(&cart.vendor_id, &lines)?;

    let (total_order_cost, _) = cart::service::totals(&lines).map_err(|_| Error::UnexpectedError)?;

    let order = repository::create(&mut *conn, customer_id, &cart.vendor_id, total_order_cost)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    for line in &lines {
        repository::create_item(&mut *conn, &order.id, line)
            .await
            .map_err(|_| Error::UnexpectedError)?;

        let taken = item::repository::take_stock(&mut *conn, &line.item_id, line.quantity)
            .await
            .map_err(|_| Error::UnexpectedError)?;

        if !taken {
            tracing::warn!(
                "Checkout of cart {} stopped: not enough stock of item {}",
                cart.id,
                line.item_id
            );
            return Err(Error::InsufficientStock(line.name.clone()));
        }
    }

    cart::repository::delete_by_id(&mut *conn, &cart.id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;

    fn line(vendor_id: &str) -> CartLine {
        CartLine {
            item_id: String::from("item"),
            vendor_id: vendor_id.to_string(),
            name: String::from("Tea"),
            price: BigDecimal::from(3),
            discount: BigDecimal::from(0),
            image: None,
            quantity: 1,
            stock: 4,
        }
    }

    #[test]
    fn empty_cart_cannot_be_checked_out() {
        assert_eq!(check_lines("v1", &[]), Err(Error::CartEmpty));
    }

    #[test]
    fn lines_must_match_the_cart_vendor() {
        assert_eq!(check_lines("v1", &[line("v1")]), Ok(()));
        assert_eq!(
            check_lines("v1", &[line("v1"), line("v2")]),
            Err(Error::VendorMismatch)
        );
    }

    #[test]
    fn only_preparing_orders_complete() {
        assert_eq!(check_completable(OrderStatus::Preparing), Ok(()));
        assert_eq!(
            check_completable(OrderStatus::Completed),
            Err(Error::AlreadyCompleted)
        );
    }
}
