use super::repository;
use crate::modules::{
    role,
    user::repository::{Role, User},
};
use sqlx::{PgConnection, PgExecutor};

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
    VendorNotFound,
    AlreadyVendorAdmin,
    NotVendorAdmin,
}

pub fn grants_access(role: Role, is_listed_admin: bool) -> bool {
    role == Role::Admin || is_listed_admin
}

/// Admins manage every vendor; everyone else must be listed as one of its admins.
pub async fn can_manage<'e, E: PgExecutor<'e>>(
    e: E,
    user: &User,
    vendor_id: &str,
) -> Result<bool, Error> {
    if user.role == Role::Admin {
        return Ok(true);
    }

    let is_listed_admin = repository::exists(e, &user.id, vendor_id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    Ok(grants_access(user.role, is_listed_admin))
}

pub async fn grant(conn: &mut PgConnection, user: &User, vendor_id: &str) -> Result<(), Error> {
    repository::create(&mut *conn, &user.id, vendor_id)
        .await
        .map_err(|err| match err {
            repository::Error::AlreadyExists => Error::AlreadyVendorAdmin,
            repository::Error::MissingReference => Error::VendorNotFound,
            repository::Error::UnexpectedError => Error::UnexpectedError,
        })?;

    if let Some(role) = role::service::role_after_vendor_grant(user.role) {
        role::repository::set(&mut *conn, &user.id, role)
            .await
            .map_err(|_| Error::UnexpectedError)?;

        tracing::info!("User {} promoted to {}", user.id, role.to_string());
    }

    Ok(())
}

pub async fn revoke(conn: &mut PgConnection, user: &User, vendor_id: &str) -> Result<(), Error> {
    let deleted = repository::delete(&mut *conn, &user.id, vendor_id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    if !deleted {
        return Err(Error::NotVendorAdmin);
    }

    let remaining = repository::count_for_user(&mut *conn, &user.id)
        .await
        .map_err(|_| Error::UnexpectedError)?;

    if let Some(role) = role::service::role_after_vendor_revoke(user.role, remaining) {
        role::repository::set(&mut *conn, &user.id, role)
            .await
            .map_err(|_| Error::UnexpectedError)?;

        tracing::info!("User {} no longer manages any vendor", user.id);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admins_bypass_the_vendor_admin_list() {
        assert!(grants_access(Role::Admin, false));
    }

    #[test]
    fn others_need_to_be_listed() {
        assert!(grants_access(Role::VendorAdmin, true));
        assert!(!grants_access(Role::VendorAdmin, false));
        assert!(!grants_access(Role::Customer, false));
    }
}
