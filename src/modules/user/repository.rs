use crate::utils::pagination::{Paginated, Pagination};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::{
    types::StorageContext,
    utils::{database, storage},
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[repr(i32)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin = 1,
    #[serde(rename = "VENDOR_ADMIN")]
    VendorAdmin = 2,
    #[serde(rename = "CUSTOMER")]
    Customer = 3,
}

impl Role {
    pub fn id(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for Role {
    type Error = ();

    fn try_from(value: i32) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Role::Admin),
            2 => Ok(Role::VendorAdmin),
            3 => Ok(Role::Customer),
            _ => Err(()),
        }
    }
}

impl ToString for Role {
    fn to_string(&self) -> String {
        match self {
            Role::Admin => String::from("ADMIN"),
            Role::VendorAdmin => String::from("VENDOR_ADMIN"),
            Role::Customer => String::from("CUSTOMER"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub image: Option<String>,
    pub role: Role,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    pub fn with_image_url(mut self, cfg: &StorageContext) -> Self {
        self.image = self.image.map(|path| storage::public_url(cfg, &path));
        self
    }
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    DuplicateEmail,
}

type Result<T> = std::result::Result<T, Error>;

const SELECT_USER: &str = "
    SELECT
        users.id,
        users.name,
        users.email,
        users.phone,
        users.password_hash,
        users.image,
        COALESCE(user_roles.role_id, 3) AS role,
        users.created_at,
        users.updated_at
    FROM users
    LEFT JOIN user_roles ON user_roles.user_id = users.id
";

pub struct CreateUserPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub image: Option<String>,
}

/// Inserts the user row only; the caller assigns the role in the same transaction.
pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CreateUserPayload) -> Result<String> {
    sqlx::query_scalar::<_, String>(
        "
        INSERT INTO users (id, name, email, phone, password_hash, image)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.email.to_lowercase())
    .bind(payload.phone)
    .bind(payload.password_hash)
    .bind(payload.image)
    .fetch_one(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::DuplicateEmail;
        }
        tracing::error!("Error occurred while trying to create a user: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE users.id = $1"))
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_email<'e, E: PgExecutor<'e>>(e: E, email: &str) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE users.email = $1"))
        .bind(email.to_lowercase())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user by email: {}", err);
            Error::UnexpectedError
        })
}

#[derive(Deserialize, Clone, Copy, Debug, Default)]
pub enum SortBy {
    #[serde(rename = "name")]
    Name,
    #[default]
    #[serde(rename = "created_at")]
    CreatedAt,
}

#[derive(Deserialize, Clone, Copy, Debug, Default)]
pub enum SortDirection {
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[default]
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

#[derive(Deserialize, Debug, Default)]
pub struct Filters {
    pub search: Option<String>,
    #[serde(default)]
    pub sort: SortBy,
    #[serde(default)]
    pub direction: SortDirection,
}

fn order_clause(filters: &Filters) -> &'static str {
    match (filters.sort, filters.direction) {
        (SortBy::Name, SortDirection::Asc) => "ORDER BY users.name ASC, users.id ASC",
        (SortBy::Name, SortDirection::Desc) => "ORDER BY users.name DESC, users.id DESC",
        (SortBy::CreatedAt, SortDirection::Asc) => "ORDER BY users.created_at ASC, users.id ASC",
        (SortBy::CreatedAt, SortDirection::Desc) => {
            "ORDER BY users.created_at DESC, users.id DESC"
        }
    }
}

pub async fn find_many<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<User>> {
    let users = sqlx::query_as::<_, User>(&format!(
        "
        {SELECT_USER}
        WHERE users.name ILIKE CONCAT('%', COALESCE($1, ''), '%')
        {}
        LIMIT $2
        OFFSET $3
        ",
        order_clause(&filters)
    ))
    .bind(filters.search.clone())
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many users: {}", err);
        Error::UnexpectedError
    })?;

    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM users WHERE name ILIKE CONCAT('%', COALESCE($1, ''), '%')",
    )
    .bind(filters.search)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to count users: {}", err);
        Error::UnexpectedError
    })?;

    Ok(Paginated::new(
        users,
        total as u32,
        pagination.page,
        pagination.per_page,
    ))
}

#[derive(Default)]
pub struct UpdateUserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password_hash: Option<String>,
    pub image: Option<String>,
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
    payload: UpdateUserPayload,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>(
        "
        WITH updated AS (
            UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                password_hash = COALESCE($5, password_hash),
                image = COALESCE($6, image),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
        )
        SELECT
            updated.id,
            updated.name,
            updated.email,
            updated.phone,
            updated.password_hash,
            updated.image,
            COALESCE(user_roles.role_id, 3) AS role,
            updated.created_at,
            updated.updated_at
        FROM updated
        LEFT JOIN user_roles ON user_roles.user_id = updated.id
        ",
    )
    .bind(id)
    .bind(payload.name)
    .bind(payload.email.map(|email| email.to_lowercase()))
    .bind(payload.phone)
    .bind(payload.password_hash)
    .bind(payload.image)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        if database::is_unique_violation(&err) {
            return Error::DuplicateEmail;
        }
        tracing::error!("Error occurred while trying to update user {}: {}", id, err);
        Error::UnexpectedError
    })
}

/// Deletes the user and returns the stored image path, `None` if no such user.
pub async fn delete_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: &str,
) -> Result<Option<Option<String>>> {
    sqlx::query_scalar::<_, Option<String>>("DELETE FROM users WHERE id = $1 RETURNING image")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to delete user {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub fn is_admin(user: &User) -> bool {
    user.role == Role::Admin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ids_match_stored_codes() {
        assert_eq!(Role::Admin.id(), 1);
        assert_eq!(Role::VendorAdmin.id(), 2);
        assert_eq!(Role::Customer.id(), 3);
        assert_eq!(Role::try_from(2), Ok(Role::VendorAdmin));
        assert_eq!(Role::try_from(7), Err(()));
    }

    #[test]
    fn role_serializes_by_name() {
        assert_eq!(
            serde_json::to_value(Role::VendorAdmin).unwrap(),
            serde_json::json!("VENDOR_ADMIN")
        );
        assert_eq!(
            serde_json::from_str::<Role>("\"CUSTOMER\"").unwrap(),
            Role::Customer
        );
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: String::from("01HZX"),
            name: String::from("Salma"),
            email: String::from("salma@example.com"),
            phone: String::from("+218912345678"),
            password_hash: String::from("$argon2id$secret"),
            image: None,
            role: Role::Customer,
            created_at: chrono::Utc::now().naive_utc(),
            updated_at: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password_hash").is_none());
        assert_eq!(value["role"], "CUSTOMER");
    }

    #[test]
    fn default_listing_is_newest_first() {
        assert_eq!(
            order_clause(&Filters::default()),
            "ORDER BY users.created_at DESC, users.id DESC"
        );
    }
}
