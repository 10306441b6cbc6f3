//! Flat-file JSON persistence.
//!
//! Each document is read whole and rewritten whole. Writes go to a sibling
//! temp file that is renamed over the target, so a crash never leaves a
//! half-written document behind.

mod repository;

pub use repository::*;

use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;

use crate::errors::StoreError;

/// Load a JSON document, treating a missing or blank file as empty.
pub async fn load<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    let content = content.trim();
    if content.is_empty() {
        return Ok(T::default());
    }

    serde_json::from_str(content).map_err(|source| StoreError::Corrupted {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `document` as pretty JSON and atomically replace `path`.
pub async fn save<T>(document: &T, path: &Path) -> Result<(), StoreError>
where
    T: Serialize,
{
    let data = serde_json::to_vec_pretty(document).map_err(StoreError::Encode)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }
    }

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, &data).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::io(&tmp, e));
    }
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(StoreError::io(path, e));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gripes, Submission, Submissions};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();

        let gripes: Gripes = load(&dir.path().join("gripes.json")).await.unwrap();
        let submissions: Submissions = load(&dir.path().join("submissions.json")).await.unwrap();

        assert!(gripes.is_empty());
        assert!(submissions.is_empty());
    }

    #[tokio::test]
    async fn test_blank_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gripes.json");
        std::fs::write(&path, "  \n\t ").unwrap();

        let gripes: Gripes = load(&path).await.unwrap();
        assert!(gripes.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_file_is_corrupted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gripes.json");
        std::fs::write(&path, "{\"abc123\": ").unwrap();

        let err = load::<Gripes>(&path).await.unwrap_err();
        assert!(err.is_corrupted());
    }

    #[tokio::test]
    async fn test_wrong_shape_is_corrupted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gripes.json");
        std::fs::write(&path, "[\"No gripes.\"]").unwrap();

        let err = load::<Gripes>(&path).await.unwrap_err();
        assert!(err.is_corrupted());
    }

    #[tokio::test]
    async fn test_gripes_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gripes.json");

        let mut gripes = Gripes::new();
        gripes.insert("a1b2c3".to_string(), "meetings before noon".to_string());
        gripes.insert("zz9y8x".to_string(), "printer jams".to_string());

        save(&gripes, &path).await.unwrap();
        let loaded: Gripes = load(&path).await.unwrap();

        assert_eq!(loaded, gripes);
    }

    #[tokio::test]
    async fn test_submissions_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("submissions.json");

        let submissions = vec![
            Submission::pending("first".to_string()),
            Submission::pending("second".to_string()),
        ];

        save(&submissions, &path).await.unwrap();
        let loaded: Submissions = load(&path).await.unwrap();

        assert_eq!(loaded, submissions);
    }

    #[tokio::test]
    async fn test_save_is_pretty_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("gripes.json");

        let mut gripes = Gripes::new();
        gripes.insert("abc123".to_string(), "wifi".to_string());
        save(&gripes, &path).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\n  \"abc123\": \"wifi\"\n}");
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_original() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gripes.json");
        std::fs::write(&path, "{\"keep01\": \"original\"}").unwrap();

        // A directory squatting on the temp path makes the write fail.
        std::fs::create_dir(temp_path(&path)).unwrap();

        let mut gripes = Gripes::new();
        gripes.insert("new001".to_string(), "replacement".to_string());
        assert!(save(&gripes, &path).await.is_err());

        let loaded: Gripes = load(&path).await.unwrap();
        assert_eq!(loaded.get("keep01").map(String::as_str), Some("original"));
    }
}
