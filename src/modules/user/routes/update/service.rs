use super::types::{request, response};
use crate::{
    modules::user::repository,
    types::Context,
    utils::{
        auth,
        storage::{self, Folder},
    },
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let request::Payload { auth, id, body } = payload;

    if auth.user.id != id && !repository::is_admin(&auth.user) {
        return Err(response::Error::Forbidden);
    }

    let existing = repository::find_by_id(&ctx.db_conn.pool, &id)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::UserNotFound)?;

    let profile = request::Profile {
        name: body.name.clone().unwrap_or_else(|| existing.name.clone()),
        phone: body.phone.clone().unwrap_or_else(|| existing.phone.clone()),
        email: body.email.clone().unwrap_or_else(|| existing.email.clone()),
        password: body.password.clone(),
    };

    profile.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if let Some(email) = &body.email {
        if let Some(owner) = repository::find_by_email(&ctx.db_conn.pool, email)
            .await
            .map_err(|_| response::Error::FailedToFetchUser)?
        {
            if owner.id != existing.id {
                return Err(response::Error::EmailAlreadyInUse);
            }
        }
    }

    let password_hash = match &body.password {
        Some(password) => Some(
            auth::hash_password(password).map_err(|_| response::Error::FailedToUpdateUser)?,
        ),
        None => None,
    };

    let image = storage::save_optional_image(&ctx.storage, Folder::Users, body.image)
        .await
        .map_err(|err| match err {
            storage::Error::InvalidImage => response::Error::InvalidImage,
            storage::Error::UploadFailed => response::Error::ImageUploadFailed,
        })?;

    let updated = repository::update_by_id(
        &ctx.db_conn.pool,
        &id,
        repository::UpdateUserPayload {
            name: body.name,
            email: body.email,
            phone: body.phone,
            password_hash,
            image: image.clone(),
        },
    )
    .await;

    let user = match updated {
        Ok(Some(user)) => user,
        failure => {
            if let Some(path) = &image {
                storage::delete_image(&ctx.storage, path).await;
            }
            return Err(match failure {
                Ok(None) => response::Error::UserNotFound,
                Err(repository::Error::DuplicateEmail) => response::Error::EmailAlreadyInUse,
                _ => response::Error::FailedToUpdateUser,
            });
        }
    };

    if let (Some(_), Some(old_image)) = (&image, &existing.image) {
        storage::delete_image(&ctx.storage, old_image).await;
    }

    Ok(response::Success::UserUpdated(
        user.with_image_url(&ctx.storage),
    ))
}
