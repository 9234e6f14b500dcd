use super::repository::{self, Table};
use crate::modules::order;
use sqlx::PgConnection;

pub const MAX_TABLES_PER_VENDOR: i64 = 12;

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    TableLimitReached,
    AlreadyAssigned,
    TableOccupied,
    NotTableHolder,
}

pub fn check_capacity(existing_tables: i64) -> Result<(), Error> {
    if existing_tables >= MAX_TABLES_PER_VENDOR {
        return Err(Error::TableLimitReached);
    }
    Ok(())
}

#[derive(Debug, PartialEq)]
pub enum Assignment {
    Claim,
    AlreadyHeld,
}

/// A customer holds at most one table, and a held table belongs to nobody else.
pub fn check_assign(
    target: &Table,
    held: Option<&Table>,
    customer_id: &str,
) -> Result<Assignment, Error> {
    if let Some(held) = held {
        if held.id == target.id {
            return Ok(Assignment::AlreadyHeld);
        }
        return Err(Error::AlreadyAssigned);
    }

    match &target.customer_id {
        Some(holder) if holder != customer_id => Err(Error::TableOccupied),
        _ => Ok(Assignment::Claim),
    }
}

pub fn check_holder(table: &Table, customer_id: &str) -> Result<(), Error> {
    match &table.customer_id {
        Some(holder) if holder == customer_id => Ok(()),
        _ => Err(Error::NotTableHolder),
    }
}

pub async fn assign(
    conn: &mut PgConnection,
    target: &Table,
    customer_id: &str,
) -> Result<Table, Error> {
    let held = repository::find_by_customer_id(&mut *conn, customer_id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    match check_assign(target, held.as_ref(), customer_id)? {
        Assignment::AlreadyHeld => Ok(target.clone()),
        Assignment::Claim => repository::assign(&mut *conn, &target.id, customer_id)
            .await
            .map_err(|err| match err {
                repository::Error::AlreadyAssigned => Error::AlreadyAssigned,
                repository::Error::UnexpectedError => Error::UnexpectedError,
            }),
    }
}

/// Releases the table and drops every order of the customer who held it.
pub async fn free(conn: &mut PgConnection, table: &Table) -> Result<Table, Error> {
    let Some(customer_id) = &table.customer_id else {
        return Ok(table.clone());
    };

    let freed = repository::free(&mut *conn, &table.id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    let deleted = order::repository::delete_by_customer_id(&mut *conn, customer_id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    tracing::info!(
        "Table {} freed, {} order(s) of customer {} deleted",
        table.id,
        deleted,
        customer_id
    );

    Ok(freed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn table(id: &str, customer_id: Option<&str>) -> Table {
        Table {
            id: id.to_string(),
            name: format!("Table {id}"),
            vendor_id: String::from("vendor"),
            customer_id: customer_id.map(String::from),
            is_available: customer_id.is_none(),
            is_needs_service: false,
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn capacity_stops_at_twelve_tables() {
        assert_eq!(check_capacity(11), Ok(()));
        assert_eq!(check_capacity(12), Err(Error::TableLimitReached));
    }

    #[test]
    fn free_table_can_be_claimed() {
        assert_eq!(
            check_assign(&table("t1", None), None, "alice"),
            Ok(Assignment::Claim)
        );
    }

    #[test]
    fn customer_cannot_hold_two_tables() {
        let held = table("t1", Some("alice"));
        assert_eq!(
            check_assign(&table("t2", None), Some(&held), "alice"),
            Err(Error::AlreadyAssigned)
        );
    }

    #[test]
    fn reclaiming_own_table_is_a_no_op() {
        let held = table("t1", Some("alice"));
        assert_eq!(
            check_assign(&held, Some(&held), "alice"),
            Ok(Assignment::AlreadyHeld)
        );
    }

    #[test]
    fn occupied_table_cannot_be_claimed() {
        assert_eq!(
            check_assign(&table("t1", Some("bob")), None, "alice"),
            Err(Error::TableOccupied)
        );
    }

    #[test]
    fn only_the_holder_passes_the_holder_check() {
        let held = table("t1", Some("alice"));
        assert_eq!(check_holder(&held, "alice"), Ok(()));
        assert_eq!(check_holder(&held, "bob"), Err(Error::NotTableHolder));
        assert_eq!(
            check_holder(&table("t2", None), "alice"),
            Err(Error::NotTableHolder)
        );
    }
}
