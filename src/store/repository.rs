//! Repository over the gripe and submission documents.
//!
//! Every operation re-reads its document from disk. Mutations run under a
//! single async mutex so concurrent admin edits cannot lose updates.

use std::path::{Path, PathBuf};

use rand::seq::IteratorRandom;
use tokio::sync::Mutex;

use super::{load, save};
use crate::errors::StoreError;
use crate::ids::{generate_id, DEFAULT_ID_LENGTH};
use crate::models::{Gripes, Submission, Submissions};
use crate::sanitize;

/// File-backed repository for gripes and submissions.
pub struct Repository {
    gripes_path: PathBuf,
    submissions_path: PathBuf,
    write_lock: Mutex<()>,
}

impl Repository {
    pub fn new(gripes_path: impl Into<PathBuf>, submissions_path: impl Into<PathBuf>) -> Self {
        Self {
            gripes_path: gripes_path.into(),
            submissions_path: submissions_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn gripes_path(&self) -> &Path {
        &self.gripes_path
    }

    pub fn submissions_path(&self) -> &Path {
        &self.submissions_path
    }

    // ==================== GRIPE OPERATIONS ====================

    /// Load the full gripe mapping.
    pub async fn list_gripes(&self) -> Result<Gripes, StoreError> {
        load(&self.gripes_path).await
    }

    /// Pick one gripe text uniformly at random, if any exist.
    pub async fn random_gripe(&self) -> Result<Option<String>, StoreError> {
        let mut gripes = self.list_gripes().await?;
        let key = gripes.keys().choose(&mut rand::thread_rng()).cloned();
        Ok(key.and_then(|k| gripes.remove(&k)))
    }

    /// Sanitize `raw` and store it under a fresh ID.
    ///
    /// Blank input is a no-op and returns `Ok(None)`.
    pub async fn add_gripe(&self, raw: &str) -> Result<Option<String>, StoreError> {
        if sanitize::is_blank(raw) {
            return Ok(None);
        }
        let text = sanitize::clean(raw);

        let _guard = self.write_lock.lock().await;
        let mut gripes = self.list_gripes().await?;

        let id = generate_id(|candidate| gripes.contains_key(candidate), DEFAULT_ID_LENGTH)
            .ok_or(StoreError::IdsExhausted)?;
        gripes.insert(id.clone(), text);

        save(&gripes, &self.gripes_path).await?;
        tracing::info!("Added gripe {}", id);
        Ok(Some(id))
    }

    /// Remove the gripe with `id`; returns whether it existed.
    pub async fn delete_gripe(&self, id: &str) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut gripes = self.list_gripes().await?;

        if gripes.remove(id).is_none() {
            tracing::debug!("Gripe {} not found, nothing deleted", id);
            return Ok(false);
        }

        save(&gripes, &self.gripes_path).await?;
        tracing::info!("Deleted gripe {}", id);
        Ok(true)
    }

    // ==================== SUBMISSION OPERATIONS ====================

    /// Load all submissions in arrival order.
    pub async fn list_submissions(&self) -> Result<Submissions, StoreError> {
        load(&self.submissions_path).await
    }

    /// Sanitize `raw` and append it as a pending submission.
    ///
    /// Blank input is a no-op and returns `Ok(false)`.
    pub async fn submit(&self, raw: &str) -> Result<bool, StoreError> {
        if sanitize::is_blank(raw) {
            return Ok(false);
        }
        let submission = Submission::pending(sanitize::clean(raw));

        let _guard = self.write_lock.lock().await;
        let mut submissions = self.list_submissions().await?;
        submissions.push(submission);

        save(&submissions, &self.submissions_path).await?;
        tracing::info!("Recorded submission #{}", submissions.len() - 1);
        Ok(true)
    }

    /// Remove the submission at `index`; out-of-range indexes are a no-op.
    pub async fn delete_submission(&self, index: usize) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut submissions = self.list_submissions().await?;

        if index >= submissions.len() {
            tracing::debug!(
                "Submission index {} out of range ({}), nothing deleted",
                index,
                submissions.len()
            );
            return Ok(false);
        }

        submissions.remove(index);
        save(&submissions, &self.submissions_path).await?;
        tracing::info!("Deleted submission #{}", index);
        Ok(true)
    }
}
