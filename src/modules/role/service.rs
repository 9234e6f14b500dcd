use crate::modules::user::repository::Role;

#[derive(Debug, PartialEq)]
pub enum Error {
    DuplicatedRole,
    RoleMismatch,
    NothingToRevoke,
}

/// Granting vendor management rights promotes customers only; admins keep their role.
pub fn role_after_vendor_grant(current: Role) -> Option<Role> {
    match current {
        Role::Customer => Some(Role::VendorAdmin),
        Role::Admin | Role::VendorAdmin => None,
    }
}

pub fn role_after_vendor_revoke(current: Role, remaining_vendors: i64) -> Option<Role> {
    (current == Role::VendorAdmin && remaining_vendors == 0).then_some(Role::Customer)
}

pub fn check_grant(current: Role, requested: Role) -> Result<(), Error> {
    if current == requested {
        return Err(Error::DuplicatedRole);
    }

    Ok(())
}

pub fn check_revoke(current: Role, requested: Role) -> Result<(), Error> {
    if current != requested {
        return Err(Error::RoleMismatch);
    }

    if current == Role::Customer {
        return Err(Error::NothingToRevoke);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_grant_promotes_only_customers() {
        assert_eq!(
            role_after_vendor_grant(Role::Customer),
            Some(Role::VendorAdmin)
        );
        assert_eq!(role_after_vendor_grant(Role::VendorAdmin), None);
        assert_eq!(role_after_vendor_grant(Role::Admin), None);
    }

    #[test]
    fn revoking_last_vendor_demotes_to_customer() {
        assert_eq!(
            role_after_vendor_revoke(Role::VendorAdmin, 0),
            Some(Role::Customer)
        );
        assert_eq!(role_after_vendor_revoke(Role::VendorAdmin, 2), None);
        assert_eq!(role_after_vendor_revoke(Role::Admin, 0), None);
    }

    #[test]
    fn granting_current_role_is_a_conflict() {
        assert_eq!(
            check_grant(Role::Admin, Role::Admin),
            Err(Error::DuplicatedRole)
        );
        assert_eq!(check_grant(Role::Customer, Role::Admin), Ok(()));
    }

    #[test]
    fn revoke_requires_matching_non_customer_role() {
        assert_eq!(
            check_revoke(Role::VendorAdmin, Role::Admin),
            Err(Error::RoleMismatch)
        );
        assert_eq!(
            check_revoke(Role::Customer, Role::Customer),
            Err(Error::NothingToRevoke)
        );
        assert_eq!(check_revoke(Role::VendorAdmin, Role::VendorAdmin), Ok(()));
    }
}
