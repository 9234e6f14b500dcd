use crate::{
    modules::user::repository::Role,
    utils::pagination::{Paginated, Pagination},
};
use serde::Serialize;
use sqlx::PgExecutor;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct UserRole {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn set<'e, E: PgExecutor<'e>>(e: E, user_id: &str, role: Role) -> Result<()> {
    sqlx::query(
        "
        INSERT INTO user_roles (user_id, role_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE SET role_id = EXCLUDED.role_id
        ",
    )
    .bind(user_id)
    .bind(role.id())
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Error occurred while setting role of user {}: {}", user_id, err);
        Error::UnexpectedError
    })
}

pub async fn find_by_user_id<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: &str,
) -> Result<Option<UserRole>> {
    sqlx::query_as::<_, UserRole>(
        "
        SELECT
            users.id AS user_id,
            users.name,
            users.email,
            COALESCE(user_roles.role_id, 3) AS role
        FROM users
        LEFT JOIN user_roles ON user_roles.user_id = users.id
        WHERE users.id = $1
        ",
    )
    .bind(user_id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching role of user {}: {}", user_id, err);
        Error::UnexpectedError
    })
}

pub async fn find_many<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    pagination: Pagination,
) -> Result<Paginated<UserRole>> {
    let roles = sqlx::query_as::<_, UserRole>(
        "
        SELECT
            users.id AS user_id,
            users.name,
            users.email,
            COALESCE(user_roles.role_id, 3) AS role
        FROM users
        LEFT JOIN user_roles ON user_roles.user_id = users.id
        ORDER BY role ASC, users.created_at ASC
        LIMIT $1
        OFFSET $2
        ",
    )
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch user roles: {}", err);
        Error::UnexpectedError
    })?;

    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to count user roles: {}", err);
            Error::UnexpectedError
        })?;

    Ok(Paginated::new(
        roles,
        total as u32,
        pagination.page,
        pagination.per_page,
    ))
}
