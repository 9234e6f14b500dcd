use crate::types::StorageContext;
use axum_typed_multipart::FieldData;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use ulid::Ulid;

pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

#[derive(Debug, PartialEq)]
pub enum Error {
    InvalidImage,
    UploadFailed,
}

/// Folders under the uploads directory, one per kind of record.
#[derive(Clone, Copy, Debug)]
pub enum Folder {
    Users,
    Vendors,
    Items,
}

impl Folder {
    fn as_str(&self) -> &'static str {
        match self {
            Folder::Users => "users",
            Folder::Vendors => "vendors",
            Folder::Items => "items",
        }
    }
}

pub fn image_extension(file_name: &str) -> Option<String> {
    let extension = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();

    ALLOWED_IMAGE_EXTENSIONS
        .contains(&extension.as_str())
        .then_some(extension)
}

fn relative_path(folder: Folder, extension: &str) -> String {
    format!(
        "{folder}/{folder}_{timestamp}_{suffix}.{extension}",
        folder = folder.as_str(),
        timestamp = chrono::Utc::now().timestamp(),
        suffix = Ulid::new().to_string().to_ascii_lowercase(),
    )
}

fn absolute_path(cfg: &StorageContext, relative: &str) -> PathBuf {
    Path::new(&cfg.upload_dir).join(relative)
}

pub fn public_url(cfg: &StorageContext, relative: &str) -> String {
    format!("{}/uploads/{}", cfg.domain.trim_end_matches('/'), relative)
}

/// Copies an uploaded temp file into the uploads directory and returns the
/// path relative to it.
pub async fn save_image(
    cfg: &StorageContext,
    folder: Folder,
    file: FieldData<NamedTempFile>,
) -> Result<String, Error> {
    let extension = file
        .metadata
        .file_name
        .as_deref()
        .and_then(image_extension)
        .ok_or(Error::InvalidImage)?;

    let relative = relative_path(folder, &extension);
    let destination = absolute_path(cfg, &relative);

    if let Some(parent) = destination.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|err| {
            tracing::error!("Failed to create upload directory {:?}: {}", parent, err);
            Error::UploadFailed
        })?;
    }

    tokio::fs::copy(file.contents.path(), &destination)
        .await
        .map_err(|err| {
            tracing::error!("Failed to store uploaded file at {:?}: {}", destination, err);
            Error::UploadFailed
        })?;

    Ok(relative)
}

pub async fn save_optional_image(
    cfg: &StorageContext,
    folder: Folder,
    file: Option<FieldData<NamedTempFile>>,
) -> Result<Option<String>, Error> {
    match file {
        Some(file) => save_image(cfg, folder, file).await.map(Some),
        None => Ok(None),
    }
}

/// Removes a stored image. Missing files are only logged.
pub async fn delete_image(cfg: &StorageContext, relative: &str) {
    let path = absolute_path(cfg, relative);

    if let Err(err) = tokio::fs::remove_file(&path).await {
        tracing::warn!("Failed to delete stored image {:?}: {}", path, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> StorageContext {
        StorageContext {
            upload_dir: String::from("uploads"),
            domain: String::from("https://api.example.com/"),
        }
    }

    #[test]
    fn accepts_only_image_extensions() {
        assert_eq!(image_extension("photo.PNG"), Some(String::from("png")));
        assert_eq!(image_extension("menu.jpeg"), Some(String::from("jpeg")));
        assert_eq!(image_extension("script.sh"), None);
        assert_eq!(image_extension("no_extension"), None);
    }

    #[test]
    fn stored_names_are_prefixed_by_folder() {
        let path = relative_path(Folder::Items, "png");

        assert!(path.starts_with("items/items_"));
        assert!(path.ends_with(".png"));
        assert_ne!(path, relative_path(Folder::Items, "png"));
    }

    #[test]
    fn public_url_uses_domain_prefix() {
        assert_eq!(
            public_url(&storage(), "vendors/vendors_1_abc.png"),
            "https://api.example.com/uploads/vendors/vendors_1_abc.png"
        );
    }

    #[tokio::test]
    async fn deleting_a_missing_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = StorageContext {
            upload_dir: dir.path().to_string_lossy().to_string(),
            ..storage()
        };

        delete_image(&cfg, "users/does_not_exist.png").await;
    }
}
