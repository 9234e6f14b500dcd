//! Runs against a real Postgres when `DATABASE_URL` is set; each test returns
//! early otherwise.

use bigdecimal::BigDecimal;
use chrono::Utc;
use sqlx::PgPool;
use std::time::Duration;
use tableside_backend_rs::{
    modules::{
        cart, item,
        item::repository::ItemFields,
        order,
        order::repository::OrderStatus,
        role, table,
        table::repository::Table,
        user::{self, repository::Role},
        vendor, vendor_admin,
    },
    types::DatabaseConfig,
    utils::database,
};
use ulid::Ulid;

async fn pool() -> Option<PgPool> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL is not set, skipping");
        return None;
    };

    let db_conn = database::connect(&DatabaseConfig {
        url,
        max_connections: 8,
        acquire_timeout_seconds: 10,
    })
    .await;
    database::migrate(db_conn.clone()).await;

    Some(db_conn.pool)
}

async fn customer(pool: &PgPool) -> String {
    let id = user::repository::create(
        pool,
        user::repository::CreateUserPayload {
            name: String::from("Dana"),
            email: format!("{}@tableside.test", Ulid::new()),
            phone: String::from("+218910000000"),
            password_hash: String::from("unused"),
            image: None,
        },
    )
    .await
    .unwrap();
    role::repository::set(pool, &id, Role::Customer).await.unwrap();
    id
}

async fn vendor(pool: &PgPool) -> String {
    vendor::repository::create(
        pool,
        vendor::repository::CreateVendorPayload {
            name: String::from("Corner Cafe"),
            description: String::from("Coffee and cake"),
            image: None,
            subscription_days: 30,
            subscription_end: Utc::now().naive_utc(),
            is_visible: true,
        },
    )
    .await
    .unwrap()
    .id
}

fn fields(name: &str, price: i32, discount: i32, quantity: i32) -> ItemFields {
    ItemFields {
        name: name.to_string(),
        price: BigDecimal::from(price),
        discount: BigDecimal::from(discount),
        discount_expiry: None,
        quantity,
    }
}

async fn menu_item(pool: &PgPool, vendor_id: &str, price: i32, discount: i32, stock: i32) -> String {
    item::repository::create(pool, vendor_id, fields("Dish", price, discount, stock), None)
        .await
        .unwrap()
        .id
}

async fn seated_customer(pool: &PgPool, vendor_id: &str) -> (String, Table) {
    let customer_id = customer(pool).await;
    let created = table::repository::create(pool, vendor_id, String::from("T1"))
        .await
        .unwrap();
    let seated = table::repository::assign(pool, &created.id, &customer_id)
        .await
        .unwrap();
    (customer_id, seated)
}

async fn add_to_cart(pool: &PgPool, customer_id: &str, item_id: &str, quantity: i32) {
    let mut tx = pool.begin().await.unwrap();
    cart::service::add_item(&mut tx, customer_id, item_id, quantity)
        .await
        .unwrap();
    tx.commit().await.unwrap();
}

async fn stock(pool: &PgPool, item_id: &str) -> i32 {
    item::repository::find_by_id(pool, item_id)
        .await
        .unwrap()
        .unwrap()
        .quantity
}

async fn assert_cart_matches_lines(pool: &PgPool, cart_id: &str) {
    let stored = cart::repository::find_by_id(pool, cart_id)
        .await
        .unwrap()
        .unwrap();
    let lines = cart::repository::find_lines(pool, cart_id).await.unwrap();

    assert_eq!(
        (stored.total_price, stored.quantity),
        cart::service::totals(&lines).unwrap()
    );
}

#[tokio::test]
async fn repricing_during_a_cart_change_keeps_totals_consistent() {
    let Some(pool) = pool().await else { return };
    let vendor_id = vendor(&pool).await;
    let x = menu_item(&pool, &vendor_id, 10, 0, 10).await;
    let y = menu_item(&pool, &vendor_id, 5, 0, 10).await;
    let (customer_id, _) = seated_customer(&pool, &vendor_id).await;
    add_to_cart(&pool, &customer_id, &x, 1).await;

    let mut adding = pool.begin().await.unwrap();
    cart::service::add_item(&mut adding, &customer_id, &y, 1)
        .await
        .unwrap();

    let repricing = tokio::spawn({
        let pool = pool.clone();
        let vendor_id = vendor_id.clone();
        let x = x.clone();
        async move {
            let mut tx = pool.begin().await.unwrap();
            item::service::update(&mut tx, &vendor_id, &x, fields("Dish", 20, 0, 10), None)
                .await
                .unwrap();
            tx.commit().await.unwrap();
        }
    });

    // let the repricing reach the cart lock
    tokio::time::sleep(Duration::from_millis(200)).await;
    adding.commit().await.unwrap();
    repricing.await.unwrap();

    assert_cart_matches_lines(&pool, &customer_id).await;
    let stored = cart::repository::find_by_id(&pool, &customer_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.total_price, BigDecimal::from(25));
    assert_eq!(stored.quantity, 2);
}

#[tokio::test]
async fn deleting_an_item_refreshes_carts_holding_it() {
    let Some(pool) = pool().await else { return };
    let vendor_id = vendor(&pool).await;
    let x = menu_item(&pool, &vendor_id, 10, 0, 10).await;
    let y = menu_item(&pool, &vendor_id, 5, 0, 10).await;
    let (customer_id, _) = seated_customer(&pool, &vendor_id).await;
    add_to_cart(&pool, &customer_id, &x, 2).await;
    add_to_cart(&pool, &customer_id, &y, 1).await;

    let mut tx = pool.begin().await.unwrap();
    let (_, refreshed) = item::service::delete(&mut tx, &vendor_id, &x).await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!(refreshed, 1);
    assert_cart_matches_lines(&pool, &customer_id).await;
}

#[tokio::test]
async fn checkout_charges_the_sum_of_its_lines() {
    let Some(pool) = pool().await else { return };
    let vendor_id = vendor(&pool).await;
    let a = menu_item(&pool, &vendor_id, 10, 0, 5).await;
    let b = menu_item(&pool, &vendor_id, 20, 15, 5).await;
    let (customer_id, _) = seated_customer(&pool, &vendor_id).await;
    add_to_cart(&pool, &customer_id, &a, 2).await;
    add_to_cart(&pool, &customer_id, &b, 1).await;

    let mut tx = pool.begin().await.unwrap();
    let placed = order::service::checkout(&mut tx, &customer_id).await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!(placed.total_order_cost, BigDecimal::from(35));
    assert_eq!(stock(&pool, &a).await, 3);
    assert_eq!(stock(&pool, &b).await, 4);
    assert!(cart::repository::find_by_id(&pool, &customer_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn oversold_checkout_leaves_nothing_behind() {
    let Some(pool) = pool().await else { return };
    let vendor_id = vendor(&pool).await;
    let a = menu_item(&pool, &vendor_id, 10, 0, 5).await;
    let b = menu_item(&pool, &vendor_id, 8, 0, 2).await;
    let (customer_id, _) = seated_customer(&pool, &vendor_id).await;
    add_to_cart(&pool, &customer_id, &a, 2).await;
    add_to_cart(&pool, &customer_id, &b, 2).await;

    // someone else bought one of the last two
    assert!(item::repository::take_stock(&pool, &b, 1).await.unwrap());

    let mut tx = pool.begin().await.unwrap();
    let result = order::service::checkout(&mut tx, &customer_id).await;
    tx.rollback().await.unwrap();

    assert!(matches!(result, Err(order::service::Error::InsufficientStock(_))));
    assert!(order::repository::find_many_by_customer_id(&pool, &customer_id)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(stock(&pool, &a).await, 5);
    assert_eq!(stock(&pool, &b).await, 1);
    assert_eq!(
        cart::repository::find_lines(&pool, &customer_id)
            .await
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn customer_cannot_claim_a_second_table() {
    let Some(pool) = pool().await else { return };
    let vendor_id = vendor(&pool).await;
    let customer_id = customer(&pool).await;
    let first = table::repository::create(&pool, &vendor_id, String::from("T1"))
        .await
        .unwrap();
    let second = table::repository::create(&pool, &vendor_id, String::from("T2"))
        .await
        .unwrap();

    let mut tx = pool.begin().await.unwrap();
    table::service::assign(&mut tx, &first, &customer_id)
        .await
        .unwrap();
    let result = table::service::assign(&mut tx, &second, &customer_id).await;
    tx.commit().await.unwrap();

    assert!(matches!(result, Err(table::service::Error::AlreadyAssigned)));
    let second = table::repository::find_by_id(&pool, &vendor_id, &second.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.customer_id, None);
}

#[tokio::test]
async fn freeing_a_table_deletes_every_order_of_its_customer() {
    let Some(pool) = pool().await else { return };
    let vendor_id = vendor(&pool).await;
    let dish = menu_item(&pool, &vendor_id, 10, 0, 10).await;
    let (customer_id, seated) = seated_customer(&pool, &vendor_id).await;

    for _ in 0..2 {
        add_to_cart(&pool, &customer_id, &dish, 1).await;
        let mut tx = pool.begin().await.unwrap();
        order::service::checkout(&mut tx, &customer_id).await.unwrap();
        tx.commit().await.unwrap();
    }
    let orders = order::repository::find_many_by_customer_id(&pool, &customer_id)
        .await
        .unwrap();
    let completed = order::repository::complete(&pool, &orders[0].id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);

    let mut tx = pool.begin().await.unwrap();
    let freed = table::service::free(&mut tx, &seated).await.unwrap();
    tx.commit().await.unwrap();

    assert_eq!(freed.customer_id, None);
    assert!(freed.is_available);
    assert!(order::repository::find_many_by_customer_id(&pool, &customer_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn revoking_the_last_vendor_demotes_to_customer() {
    let Some(pool) = pool().await else { return };
    let first = vendor(&pool).await;
    let second = vendor(&pool).await;
    let user_id = customer(&pool).await;

    async fn reload(pool: &PgPool, id: &str) -> user::repository::User {
        user::repository::find_by_id(pool, id).await.unwrap().unwrap()
    }

    let mut tx = pool.begin().await.unwrap();
    for vendor_id in [&first, &second] {
        let user = reload(&pool, &user_id).await;
        vendor_admin::service::grant(&mut tx, &user, vendor_id)
            .await
            .unwrap();
        tx.commit().await.unwrap();
        tx = pool.begin().await.unwrap();
    }
    assert_eq!(reload(&pool, &user_id).await.role, Role::VendorAdmin);

    let user = reload(&pool, &user_id).await;
    vendor_admin::service::revoke(&mut tx, &user, &first)
        .await
        .unwrap();
    tx.commit().await.unwrap();
    assert_eq!(reload(&pool, &user_id).await.role, Role::VendorAdmin);

    let mut tx = pool.begin().await.unwrap();
    let user = reload(&pool, &user_id).await;
    vendor_admin::service::revoke(&mut tx, &user, &second)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let user = reload(&pool, &user_id).await;
    assert_eq!(user.role, Role::Customer);
    assert_eq!(user.role.id(), 3);
}

#[tokio::test]
async fn duplicate_email_is_reported_as_such() {
    let Some(pool) = pool().await else { return };
    let email = format!("{}@tableside.test", Ulid::new());
    let payload = || user::repository::CreateUserPayload {
        name: String::from("Dana"),
        email: email.clone(),
        phone: String::from("+218910000000"),
        password_hash: String::from("unused"),
        image: None,
    };

    user::repository::create(&pool, payload()).await.unwrap();
    let again = user::repository::create(&pool, payload()).await;

    assert!(matches!(again, Err(user::repository::Error::DuplicateEmail)));
}

#[tokio::test]
async fn locking_a_vendor_reports_whether_it_exists() {
    let Some(pool) = pool().await else { return };
    let vendor_id = vendor(&pool).await;

    let mut tx = pool.begin().await.unwrap();
    assert!(vendor::repository::lock_by_id(&mut *tx, &vendor_id).await.unwrap());
    assert!(!vendor::repository::lock_by_id(&mut *tx, &Ulid::new().to_string())
        .await
        .unwrap());
    tx.rollback().await.unwrap();
}
