use super::types::{request, response};
use crate::{
    modules::{
        role,
        user::{self, repository::Role},
    },
    types::Context,
    utils::{
        auth,
        storage::{self, Folder},
    },
};
use std::sync::Arc;
use validator::Validate;

struct NewUser {
    name: String,
    phone: String,
    email: String,
    password_hash: String,
    image: Option<String>,
}

async fn persist(ctx: &Context, new_user: NewUser) -> Result<user::repository::User, response::Error> {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    let user_id = user::repository::create(
        &mut *tx,
        user::repository::CreateUserPayload {
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            password_hash: new_user.password_hash,
            image: new_user.image,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::DuplicateEmail => response::Error::EmailAlreadyInUse,
        user::repository::Error::UnexpectedError => response::Error::SignupFailed,
    })?;

    role::repository::set(&mut *tx, &user_id, Role::Customer)
        .await
        .map_err(|_| response::Error::SignupFailed)?;

    let user = user::repository::find_by_id(&mut *tx, &user_id)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::SignupFailed)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::UnexpectedError
    })?;

    Ok(user)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if user::repository::find_by_email(&ctx.db_conn.pool, &payload.email)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash =
        auth::hash_password(&payload.password).map_err(|_| response::Error::SignupFailed)?;

    let image = storage::save_optional_image(&ctx.storage, Folder::Users, payload.image)
        .await
        .map_err(|err| match err {
            storage::Error::InvalidImage => response::Error::InvalidImage,
            storage::Error::UploadFailed => response::Error::ImageUploadFailed,
        })?;

    let new_user = NewUser {
        name: payload.name,
        phone: payload.phone,
        email: payload.email,
        password_hash,
        image: image.clone(),
    };

    match persist(&ctx, new_user).await {
        Ok(user) => Ok(response::Success::SignedUp(user.with_image_url(&ctx.storage))),
        Err(err) => {
            if let Some(path) = image {
                storage::delete_image(&ctx.storage, &path).await;
            }
            Err(err)
        }
    }
}
