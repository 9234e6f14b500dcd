use super::repository::{self, Item, ItemFields};
use crate::{modules::cart, utils::validation};
use bigdecimal::{BigDecimal, Zero};
use chrono::{Duration, NaiveDateTime};
use sqlx::PgConnection;
use std::str::FromStr;
use validator::ValidationErrors;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    ItemNotFound,
}

pub const MAX_STOCK: i32 = 1_000_000;

/// Raw item fields as sent by the client. `None` keeps the stored value on update.
#[derive(Default, Debug)]
pub struct ItemInput {
    pub name: Option<String>,
    pub price: Option<String>,
    pub discount: Option<String>,
    pub discount_days: Option<i32>,
    pub quantity: Option<i32>,
}

fn parse_amount(
    errors: &mut ValidationErrors,
    field: &'static str,
    raw: &str,
) -> Option<BigDecimal> {
    match BigDecimal::from_str(raw.trim()) {
        Ok(amount) => Some(amount.with_scale(2)),
        Err(_) => {
            errors.add(field, validation::error("INVALID_NUMBER", "must be a number"));
            None
        }
    }
}

/// Merges `input` over `existing` and checks the result, reporting every failing field at once.
pub fn resolve(
    existing: Option<&Item>,
    input: ItemInput,
    now: NaiveDateTime,
) -> Result<ItemFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = input
        .name
        .or_else(|| existing.map(|item| item.name.clone()))
        .unwrap_or_default();
    let name_length = name.trim().chars().count();
    if name_length == 0 || name_length > 20 {
        errors.add(
            "name",
            validation::error("INVALID_NAME", "must be between 1 and 20 characters"),
        );
    }

    let price = match &input.price {
        Some(raw) => parse_amount(&mut errors, "price", raw),
        None => existing.map(|item| item.price.clone()),
    };
    match &price {
        Some(price) if *price <= BigDecimal::zero() => errors.add(
            "price",
            validation::error("INVALID_PRICE", "must be greater than zero"),
        ),
        None if !errors.errors().contains_key("price") => {
            errors.add("price", validation::error("REQUIRED", "is required"))
        }
        _ => {}
    }

    let discount = match &input.discount {
        Some(raw) => parse_amount(&mut errors, "discount", raw),
        None => Some(
            existing
                .map(|item| item.discount.clone())
                .unwrap_or_else(BigDecimal::zero),
        ),
    };
    if let (Some(discount), Some(price)) = (&discount, &price) {
        if *discount < BigDecimal::zero() {
            errors.add(
                "discount",
                validation::error("INVALID_DISCOUNT", "must not be negative"),
            );
        } else if !discount.is_zero() && discount >= price {
            errors.add(
                "discount",
                validation::error("INVALID_DISCOUNT", "must be less than the price"),
            );
        }
    }

    let discount_expiry = match (&discount, input.discount_days) {
        (Some(discount), _) if discount.is_zero() => None,
        (None, _) => None,
        (_, Some(days)) if days > 0 => Some(now + Duration::days(days as i64)),
        (_, Some(_)) => {
            errors.add(
                "discount_days",
                validation::error("INVALID_DISCOUNT_DAYS", "must be greater than zero"),
            );
            None
        }
        (_, None) => {
            let expiry = existing.and_then(|item| item.discount_expiry);
            if expiry.is_none() {
                errors.add(
                    "discount_days",
                    validation::error("REQUIRED", "is required when a discount is given"),
                );
            }
            expiry
        }
    };

    let quantity = input
        .quantity
        .or_else(|| existing.map(|item| item.quantity))
        .unwrap_or_default();
    if quantity < 0 {
        errors.add(
            "quantity",
            validation::error("INVALID_QUANTITY", "must not be negative"),
        );
    } else if quantity > MAX_STOCK {
        errors.add(
            "quantity",
            validation::error("INVALID_QUANTITY", "must not exceed 1000000"),
        );
    }

    match (price, discount) {
        (Some(price), Some(discount)) if errors.errors().is_empty() => Ok(ItemFields {
            name: name.trim().to_string(),
            price,
            discount,
            discount_expiry,
            quantity,
        }),
        _ => Err(errors),
    }
}

/// Whether changing `existing` into `fields` changes what a cart pays for it.
pub fn changes_unit_price(existing: &Item, fields: &ItemFields) -> bool {
    existing.price != fields.price || existing.discount != fields.discount
}

/// Writes `fields` over the item and, when its unit price moves, refreshes
/// every cart holding it.
///
/// The item row is locked first and the carts after it, the same order cart
/// mutations and checkout take.
pub async fn update(
    conn: &mut PgConnection,
    vendor_id: &str,
    item_id: &str,
    fields: ItemFields,
    image: Option<String>,
) -> Result<Item, Error> {
    let current = repository::find_by_vendor_id_and_id_for_update(&mut *conn, vendor_id, item_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::ItemNotFound)?;

    let reprice = changes_unit_price(&current, &fields);

    let item = repository::update_by_id(&mut *conn, item_id, fields, image)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::ItemNotFound)?;

    if reprice {
        let cart_ids = cart::repository::find_ids_by_item_id(&mut *conn, item_id)
            .await
            .map_err(|_| Error::UnexpectedError)?;

        cart::service::refresh_many(&mut *conn, &cart_ids)
            .await
            .map_err(|_| Error::UnexpectedError)?;

        tracing::info!("Item {} repriced, {} cart(s) refreshed", item_id, cart_ids.len());
    }

    Ok(item)
}

/// Deletes the item and refreshes the carts it was in. Returns the deleted
/// item and how many carts were touched.
pub async fn delete(
    conn: &mut PgConnection,
    vendor_id: &str,
    item_id: &str,
) -> Result<(Item, usize), Error> {
    repository::find_by_vendor_id_and_id_for_update(&mut *conn, vendor_id, item_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::ItemNotFound)?;

    let cart_ids = cart::repository::find_ids_by_item_id(&mut *conn, item_id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    // the cascade rewrites their lines
    cart::repository::lock_many(&mut *conn, &cart_ids)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    let item = repository::delete_by_id(&mut *conn, item_id)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::ItemNotFound)?;

    cart::service::refresh_many(&mut *conn, &cart_ids)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    Ok((item, cart_ids.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn stored() -> Item {
        Item {
            id: String::from("item"),
            vendor_id: String::from("vendor"),
            name: String::from("Shawarma"),
            price: BigDecimal::from(20),
            discount: BigDecimal::from(15),
            discount_expiry: Some(now() + Duration::days(3)),
            quantity: 8,
            image: None,
            created_at: now(),
            updated_at: None,
        }
    }

    fn input(name: &str, price: &str) -> ItemInput {
        ItemInput {
            name: Some(name.to_string()),
            price: Some(price.to_string()),
            quantity: Some(5),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_an_undiscounted_item() {
        let fields = resolve(None, input("Falafel", "10"), now()).unwrap();

        assert_eq!(fields.price, BigDecimal::from(10));
        assert!(fields.discount.is_zero());
        assert_eq!(fields.discount_expiry, None);
    }

    #[test]
    fn stock_is_bounded() {
        let errors = resolve(
            None,
            ItemInput {
                quantity: Some(MAX_STOCK + 1),
                ..input("Falafel", "10")
            },
            now(),
        )
        .unwrap_err();

        assert!(errors.errors().contains_key("quantity"));
    }

    #[test]
    fn discount_sets_an_expiry() {
        let fields = resolve(
            None,
            ItemInput {
                discount: Some(String::from("7.5")),
                discount_days: Some(2),
                ..input("Falafel", "10")
            },
            now(),
        )
        .unwrap();

        assert_eq!(fields.discount_expiry, Some(now() + Duration::days(2)));
    }

    #[test]
    fn reports_every_invalid_field() {
        let errors = resolve(
            None,
            ItemInput {
                name: Some(String::new()),
                price: Some(String::from("0")),
                quantity: Some(-1),
                ..Default::default()
            },
            now(),
        )
        .unwrap_err();

        let fields = errors.errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("quantity"));
    }

    #[test]
    fn rejects_unparsable_price() {
        let errors = resolve(None, input("Falafel", "ten"), now()).unwrap_err();
        assert!(errors.errors().contains_key("price"));
    }

    #[test]
    fn discount_must_stay_below_price() {
        let errors = resolve(
            None,
            ItemInput {
                discount: Some(String::from("10")),
                discount_days: Some(1),
                ..input("Falafel", "10")
            },
            now(),
        )
        .unwrap_err();

        assert!(errors.errors().contains_key("discount"));
    }

    #[test]
    fn discount_requires_days() {
        let errors = resolve(
            None,
            ItemInput {
                discount: Some(String::from("5")),
                ..input("Falafel", "10")
            },
            now(),
        )
        .unwrap_err();

        assert!(errors.errors().contains_key("discount_days"));
    }

    #[test]
    fn update_keeps_stored_values() {
        let item = stored();
        let fields = resolve(
            Some(&item),
            ItemInput {
                quantity: Some(2),
                ..Default::default()
            },
            now(),
        )
        .unwrap();

        assert_eq!(fields.name, item.name);
        assert_eq!(fields.discount, item.discount);
        assert_eq!(fields.discount_expiry, item.discount_expiry);
        assert_eq!(fields.quantity, 2);
        assert!(!changes_unit_price(&item, &fields));
    }

    #[test]
    fn lowering_the_price_under_the_discount_is_rejected() {
        let errors = resolve(
            Some(&stored()),
            ItemInput {
                price: Some(String::from("12")),
                ..Default::default()
            },
            now(),
        )
        .unwrap_err();

        assert!(errors.errors().contains_key("discount"));
    }

    #[test]
    fn clearing_the_discount_drops_the_expiry() {
        let item = stored();
        let fields = resolve(
            Some(&item),
            ItemInput {
                discount: Some(String::from("0")),
                ..Default::default()
            },
            now(),
        )
        .unwrap();

        assert_eq!(fields.discount_expiry, None);
        assert!(changes_unit_price(&item, &fields));
    }
}
