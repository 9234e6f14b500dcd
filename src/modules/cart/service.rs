use super::repository::{self, Cart, CartLine};
use crate::modules::{item, table};
use bigdecimal::{BigDecimal, Zero};
use sqlx::PgConnection;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    NoTable,
    InvalidQuantity,
    ItemNotFound,
    InsufficientStock,
    VendorMismatch,
    AlreadyInCart,
    CartNotFound,
    NotInCart,
    RemovingMoreThanInCart,
    QuantityTooLarge,
}

/// Upper bound on a single cart line.
pub const MAX_LINE_QUANTITY: i32 = 10_000;

/// What a customer pays for one unit: the discount price when one is set.
pub fn unit_price(price: &BigDecimal, discount: &BigDecimal) -> BigDecimal {
    if *discount > BigDecimal::zero() {
        discount.clone()
    } else {
        price.clone()
    }
}

impl CartLine {
    pub fn unit_price(&self) -> BigDecimal {
        unit_price(&self.price, &self.discount)
    }
}

pub fn totals(lines: &[CartLine]) -> Result<(BigDecimal, i32), Error> {
    lines
        .iter()
        .try_fold((BigDecimal::zero(), 0i32), |(total, quantity), line| {
            let quantity = quantity
                .checked_add(line.quantity)
                .ok_or(Error::QuantityTooLarge)?;
            Ok((
                total + line.unit_price() * BigDecimal::from(line.quantity),
                quantity,
            ))
        })
}

pub fn check_quantity(quantity: i32) -> Result<(), Error> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity);
    }
    if quantity > MAX_LINE_QUANTITY {
        return Err(Error::QuantityTooLarge);
    }
    Ok(())
}

pub fn check_vendor(cart_vendor_id: &str, item_vendor_id: &str) -> Result<(), Error> {
    if cart_vendor_id != item_vendor_id {
        return Err(Error::VendorMismatch);
    }
    Ok(())
}

pub fn check_stock(stock: i32, requested: i32) -> Result<(), Error> {
    if requested > stock {
        return Err(Error::InsufficientStock);
    }
    Ok(())
}

#[derive(Debug, PartialEq)]
pub enum Removal {
    Line,
    Decrement(i32),
}

/// No quantity, zero, or the whole amount drops the line.
pub fn plan_removal(in_cart: i32, requested: Option<i32>) -> Result<Removal, Error> {
    match requested {
        None | Some(0) => Ok(Removal::Line),
        Some(quantity) if quantity < 0 => Err(Error::InvalidQuantity),
        Some(quantity) if quantity > in_cart => Err(Error::RemovingMoreThanInCart),
        Some(quantity) if quantity == in_cart => Ok(Removal::Line),
        Some(quantity) => Ok(Removal::Decrement(in_cart - quantity)),
    }
}

/// Recomputes the aggregate from the cart's lines. An emptied cart is deleted.
///
/// The cart row is locked before its lines are read, so a concurrent mutation
/// of the same cart is always folded in.
pub async fn refresh_totals(conn: &mut PgConnection, cart_id: &str) -> Result<Option<Cart>, Error> {
    let cart = repository::find_by_id_for_update(&mut *conn, cart_id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    if cart.is_none() {
        return Ok(None);
    }

    let lines = repository::find_lines(&mut *conn, cart_id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    if lines.is_empty() {
        repository::delete_by_id(&mut *conn, cart_id)
            .await
            .map_err(|_| Error::UnexpectedError)?;
        return Ok(None);
    }

    let (total_price, quantity) = totals(&lines)?;

    repository::update_totals(&mut *conn, cart_id, total_price, quantity)
        .await
        .map(Some)
        .map_err(|_| Error::UnexpectedError)
}

/// Refreshes every listed cart, taking their locks in id order.
pub async fn refresh_many(conn: &mut PgConnection, cart_ids: &[String]) -> Result<(), Error> {
    let mut cart_ids = cart_ids.to_vec();
    cart_ids.sort();
    cart_ids.dedup();

    repository::lock_many(&mut *conn, &cart_ids)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    for cart_id in &cart_ids {
        refresh_totals(&mut *conn, cart_id).await?;
    }
    Ok(())
}

pub async fn add_item(
    conn: &mut PgConnection,
    customer_id: &str,
    item_id: &str,
    quantity: i32,
) -> Result<Option<Cart>, Error> {
    check_quantity(quantity)?;

    table::repository::find_by_customer_id(&mut *conn, customer_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::NoTable)?;

    // item before cart, the order every repricing takes
    let item = item::repository::find_by_id_for_share(&mut *conn, item_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::ItemNotFound)?;

    check_stock(item.quantity, quantity)?;

    let cart = match repository::find_by_id_for_update(&mut *conn, customer_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
    {
        Some(cart) => {
            check_vendor(&cart.vendor_id, &item.vendor_id)?;
            cart
        }
        None => repository::create(&mut *conn, customer_id, &item.vendor_id)
            .await
            .map_err(|_| Error::UnexpectedError)?,
    };

    repository::add_item(&mut *conn, &cart.id, &item.id, quantity)
        .await
        .map_err(|err| match err {
            repository::Error::AlreadyInCart => Error::AlreadyInCart,
            repository::Error::UnexpectedError => Error::UnexpectedError,
        })?;

    refresh_totals(conn, &cart.id).await
}

pub async fn update_item(
    conn: &mut PgConnection,
    customer_id: &str,
    item_id: &str,
    quantity: i32,
) -> Result<Option<Cart>, Error> {
    if quantity == 0 {
        return remove_item(conn, customer_id, item_id, None).await;
    }
    check_quantity(quantity)?;

    let item = item::repository::find_by_id_for_share(&mut *conn, item_id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    let cart = repository::find_by_id_for_update(&mut *conn, customer_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::CartNotFound)?;

    repository::find_item_quantity(&mut *conn, &cart.id, item_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::NotInCart)?;

    let item = item.ok_or(Error::ItemNotFound)?;

    check_vendor(&cart.vendor_id, &item.vendor_id)?;
    check_stock(item.quantity, quantity)?;

    repository::set_item_quantity(&mut *conn, &cart.id, item_id, quantity)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    refresh_totals(conn, &cart.id).await
}

pub async fn remove_item(
    conn: &mut PgConnection,
    customer_id: &str,
    item_id: &str,
    quantity: Option<i32>,
) -> Result<Option<Cart>, Error> {
    let cart = repository::find_by_id_for_update(&mut *conn, customer_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::CartNotFound)?;

    let in_cart = repository::find_item_quantity(&mut *conn, &cart.id, item_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::NotInCart)?;

    let removed = match plan_removal(in_cart, quantity)? {
        Removal::Line => repository::remove_item(&mut *conn, &cart.id, item_id).await,
        Removal::Decrement(left) => {
            repository::set_item_quantity(&mut *conn, &cart.id, item_id, left).await
        }
    };
    removed.map_err(|_| Error::UnexpectedError)?;

    refresh_totals(conn, &cart.id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item_id: &str, price: i32, discount: i32, quantity: i32) -> CartLine {
        CartLine {
            item_id: item_id.to_string(),
            vendor_id: String::from("v1"),
            name: item_id.to_uppercase(),
            price: BigDecimal::from(price),
            discount: BigDecimal::from(discount),
            image: None,
            quantity,
            stock: 10,
        }
    }

    #[test]
    fn discount_price_wins_when_set() {
        assert_eq!(
            unit_price(&BigDecimal::from(20), &BigDecimal::from(15)),
            BigDecimal::from(15)
        );
        assert_eq!(
            unit_price(&BigDecimal::from(20), &BigDecimal::zero()),
            BigDecimal::from(20)
        );
    }

    #[test]
    fn totals_value_each_line_at_its_unit_price() {
        let lines = vec![line("a", 10, 0, 2), line("b", 20, 15, 1)];

        assert_eq!(totals(&lines), Ok((BigDecimal::from(35), 3)));
    }

    #[test]
    fn empty_cart_totals_to_zero() {
        assert_eq!(totals(&[]), Ok((BigDecimal::zero(), 0)));
    }

    #[test]
    fn oversized_quantities_are_rejected_instead_of_overflowing() {
        let lines = vec![
            line("a", 1, 0, 2_000_000_000),
            line("b", 1, 0, 2_000_000_000),
        ];

        assert_eq!(totals(&lines), Err(Error::QuantityTooLarge));
    }

    #[test]
    fn line_quantity_is_bounded() {
        assert_eq!(check_quantity(1), Ok(()));
        assert_eq!(check_quantity(MAX_LINE_QUANTITY), Ok(()));
        assert_eq!(check_quantity(0), Err(Error::InvalidQuantity));
        assert_eq!(
            check_quantity(MAX_LINE_QUANTITY + 1),
            Err(Error::QuantityTooLarge)
        );
    }

    #[test]
    fn items_from_another_vendor_are_rejected() {
        assert_eq!(check_vendor("v1", "v1"), Ok(()));
        assert_eq!(check_vendor("v1", "v2"), Err(Error::VendorMismatch));
    }

    #[test]
    fn stock_must_cover_the_request() {
        assert_eq!(check_stock(3, 3), Ok(()));
        assert_eq!(check_stock(3, 4), Err(Error::InsufficientStock));
    }

    #[test]
    fn removal_plans() {
        assert_eq!(plan_removal(3, None), Ok(Removal::Line));
        assert_eq!(plan_removal(3, Some(0)), Ok(Removal::Line));
        assert_eq!(plan_removal(3, Some(3)), Ok(Removal::Line));
        assert_eq!(plan_removal(3, Some(1)), Ok(Removal::Decrement(2)));
        assert_eq!(
            plan_removal(3, Some(4)),
            Err(Error::RemovingMoreThanInCart)
        );
        assert_eq!(plan_removal(3, Some(-1)), Err(Error::InvalidQuantity));
    }
}
