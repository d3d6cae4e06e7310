use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfilePatch};
use crate::profile::validation::{sanitize, validate_patch};
use crate::storage::{KeyValueStore, StorageError};

/// Storage key the profile blob lives under.
pub const PROFILE_KEY: &str = "careerBuddyUser";

/// Holds the single user profile and mirrors every change to storage.
///
/// Lifecycle: `load` once at startup, then `snapshot` / `merge_save` / `clear`.
/// Updates run read-merge-write under one write lock, so concurrent merges
/// never lose each other's fields.
pub struct ProfileStore {
    backend: Arc<dyn KeyValueStore>,
    current: RwLock<Profile>,
}

impl ProfileStore {
    /// Reads the stored blob. Absent key means the default profile.
    ///
    /// Missing or mistyped fields default and invalid labels are dropped,
    /// field by field. Only a blob that is not a JSON object is removed and
    /// replaced by the default profile.
    pub async fn load(backend: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let profile = match backend.get(PROFILE_KEY).await? {
            None => {
                info!("No stored profile found; starting from defaults");
                Profile::default()
            }
            Some(raw) => match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(serde_json::Value::Object(fields)) => {
                    let (mut profile, mut dropped) = Profile::from_stored_fields(fields);
                    dropped.extend(sanitize(&mut profile));
                    if !dropped.is_empty() {
                        warn!(
                            "Stored profile had {} invalid value(s), dropped: {}",
                            dropped.len(),
                            dropped.join(", ")
                        );
                    }
                    info!(
                        "Loaded stored profile (assessment completed: {})",
                        profile.assessment_completed
                    );
                    profile
                }
                Ok(other) => {
                    warn!("Stored profile is not a JSON object ({other}); resetting to defaults");
                    backend.remove(PROFILE_KEY).await?;
                    Profile::default()
                }
                Err(e) => {
                    warn!("Stored profile is unreadable ({e}); resetting to defaults");
                    backend.remove(PROFILE_KEY).await?;
                    Profile::default()
                }
            },
        };

        Ok(ProfileStore {
            backend,
            current: RwLock::new(profile),
        })
    }

    pub async fn snapshot(&self) -> Profile {
        self.current.read().await.clone()
    }

    /// Validates and merges `patch`, persists, and returns the new profile.
    /// On any failure the in-memory profile is left unchanged.
    pub async fn merge_save(&self, patch: ProfilePatch) -> Result<Profile, AppError> {
        validate_patch(&patch)?;

        let mut current = self.current.write().await;
        let mut updated = current.clone();
        updated.merge(patch);

        let encoded = serde_json::to_string(&updated)?;
        self.backend.set(PROFILE_KEY, &encoded).await?;

        *current = updated.clone();
        info!("Profile saved");
        Ok(updated)
    }

    /// Resets to the default profile and deletes the stored blob.
    pub async fn clear(&self) -> Result<(), StorageError> {
        let mut current = self.current.write().await;
        self.backend.remove(PROFILE_KEY).await?;
        *current = Profile::default();
        info!("Profile cleared");
        Ok(())
    }
}
