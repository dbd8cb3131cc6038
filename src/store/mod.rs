use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{PortfolioItem, UserProfile, ValidationError};

/// Backup file format version.
pub const BACKUP_VERSION: u32 = 1;

/// Exported profile, as written by "Export Backup".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileBackup {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub profile: UserProfile,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("backup version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid backup: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Persist(#[from] anyhow::Error),
}

/// The device-local profile: held in memory, mirrored to a JSON file.
///
/// Every mutation rewrites the whole file; the last write wins.
#[derive(Clone)]
pub struct ProfileStore {
    path: Arc<PathBuf>,
    default_username: Arc<str>,
    inner: Arc<Mutex<UserProfile>>,
}

impl ProfileStore {
    /// Load the profile at `path`, starting fresh when the file is missing
    /// or unreadable.
    pub async fn open(path: impl Into<PathBuf>, default_username: &str) -> anyhow::Result<Self> {
        let path = path.into();
        let profile = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(profile) => {
                    tracing::info!(
                        path = %path.display(),
                        owned = profile.owned.len(),
                        wishlist = profile.wishlist.len(),
                        "Profile loaded"
                    );
                    profile
                }
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Profile file is corrupt, starting with a fresh profile"
                    );
                    UserProfile::new(default_username)
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No saved profile, starting fresh");
                UserProfile::new(default_username)
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: Arc::new(path),
            default_username: Arc::from(default_username),
            inner: Arc::new(Mutex::new(profile)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of the current profile.
    pub async fn snapshot(&self) -> UserProfile {
        self.inner.lock().await.clone()
    }

    /// Toggle a catalog id on the wishlist. Returns true if now watched.
    pub async fn toggle_wishlist(&self, sneaker_id: &str) -> anyhow::Result<bool> {
        let watching = self.update(|profile| profile.toggle_wishlist(sneaker_id)).await?;

        tracing::debug!(sneaker_id, watching, "Wishlist toggled");
        Ok(watching)
    }

    /// Log an acquisition.
    pub async fn add_item(&self, item: PortfolioItem) -> anyhow::Result<PortfolioItem> {
        self.update(|profile| profile.owned.push(item.clone())).await?;

        tracing::info!(
            item_id = %item.id,
            sneaker_id = %item.sneaker_id,
            purchase_price = %item.purchase_price,
            "Portfolio item added"
        );
        Ok(item)
    }

    /// Remove a holding. Returns false if no such item.
    pub async fn remove_item(&self, item_id: Uuid) -> anyhow::Result<bool> {
        let mut current = self.inner.lock().await;
        if current.find_item(item_id).is_none() {
            return Ok(false);
        }

        let mut next = current.clone();
        next.owned.retain(|item| item.id != item_id);
        self.persist(&next).await?;
        *current = next;

        tracing::info!(item_id = %item_id, "Portfolio item removed");
        Ok(true)
    }

    pub async fn export_backup(&self) -> ProfileBackup {
        ProfileBackup {
            version: BACKUP_VERSION,
            exported_at: Utc::now(),
            profile: self.snapshot().await,
        }
    }

    /// Replace the profile with a backup's contents.
    ///
    /// The backup must be of a known version and its holdings must pass the
    /// same checks as new acquisitions.
    pub async fn import_backup(&self, backup: ProfileBackup) -> Result<UserProfile, ImportError> {
        if backup.version > BACKUP_VERSION {
            return Err(ImportError::UnsupportedVersion {
                found: backup.version,
                supported: BACKUP_VERSION,
            });
        }
        backup.profile.validate()?;

        let restored = backup.profile;
        let owned = restored.owned.len();
        self.update(move |profile| *profile = restored).await?;

        tracing::info!(exported_at = %backup.exported_at, owned, "Profile restored from backup");
        Ok(self.snapshot().await)
    }

    /// Discard all local data and start over.
    pub async fn reset(&self) -> anyhow::Result<UserProfile> {
        let fresh = UserProfile::new(&*self.default_username);
        self.update(|profile| *profile = fresh.clone()).await?;

        tracing::warn!(path = %self.path.display(), "Profile reset");
        Ok(fresh)
    }

    /// Apply `mutate` to a copy, persist it, and only then make it current.
    /// A failed write leaves the in-memory profile untouched.
    async fn update<T>(&self, mutate: impl FnOnce(&mut UserProfile) -> T) -> anyhow::Result<T> {
        let mut current = self.inner.lock().await;
        let mut next = current.clone();
        let out = mutate(&mut next);

        self.persist(&next).await?;
        *current = next;
        Ok(out)
    }

    /// Write via a temp file + rename so a crash never leaves a half file.
    async fn persist(&self, profile: &UserProfile) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(profile)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, self.path.as_path()).await?;

        crate::metrics::record_profile_gauges(profile.owned.len(), profile.wishlist.len());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Condition, ShoeSize};
    use rust_decimal::Decimal;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("sneakpeak-test-{}", Uuid::new_v4()))
            .join("profile.json")
    }

    fn make_item(sneaker_id: &str, paid: i64) -> PortfolioItem {
        PortfolioItem {
            id: Uuid::new_v4(),
            sneaker_id: sneaker_id.into(),
            size: ShoeSize::parse("11").unwrap(),
            purchase_price: Decimal::from(paid),
            condition: Condition::VeryNearDeadstock,
            purchase_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_open_missing_file_starts_fresh() {
        let store = ProfileStore::open(temp_path(), "Collector_One").await.unwrap();
        let profile = store.snapshot().await;
        assert_eq!(profile.username, "Collector_One");
        assert!(profile.owned.is_empty());
    }

    #[tokio::test]
    async fn test_mutations_survive_reopen() {
        let path = temp_path();
        let store = ProfileStore::open(&path, "kicks").await.unwrap();

        assert!(store.toggle_wishlist("jordan-1-chicago").await.unwrap());
        let item = store.add_item(make_item("jordan-1-chicago", 150)).await.unwrap();

        let reopened = ProfileStore::open(&path, "someone-else").await.unwrap();
        let profile = reopened.snapshot().await;
        assert_eq!(profile.username, "kicks");
        assert!(profile.is_watching("jordan-1-chicago"));
        assert_eq!(profile.find_item(item.id), Some(&item));
    }

    #[tokio::test]
    async fn test_toggle_wishlist_twice_unwatches() {
        let store = ProfileStore::open(temp_path(), "kicks").await.unwrap();
        assert!(store.toggle_wishlist("dunk-panda").await.unwrap());
        assert!(!store.toggle_wishlist("dunk-panda").await.unwrap());
        assert!(store.snapshot().await.wishlist.is_empty());
    }

    #[tokio::test]
    async fn test_remove_item() {
        let store = ProfileStore::open(temp_path(), "kicks").await.unwrap();
        let item = store.add_item(make_item("a", 100)).await.unwrap();

        assert!(!store.remove_item(Uuid::new_v4()).await.unwrap());
        assert!(store.remove_item(item.id).await.unwrap());
        assert!(store.snapshot().await.owned.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_fresh() {
        let path = temp_path();
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = ProfileStore::open(&path, "fresh").await.unwrap();
        assert_eq!(store.snapshot().await.username, "fresh");
    }

    #[tokio::test]
    async fn test_backup_round_trip_and_reset() {
        let store = ProfileStore::open(temp_path(), "kicks").await.unwrap();
        store.add_item(make_item("a", 100)).await.unwrap();
        let backup = store.export_backup().await;
        assert_eq!(backup.version, BACKUP_VERSION);

        let reset = store.reset().await.unwrap();
        assert!(reset.owned.is_empty());
        assert_eq!(reset.username, "kicks");

        let restored = store.import_backup(backup).await.unwrap();
        assert_eq!(restored.owned.len(), 1);
    }

    #[tokio::test]
    async fn test_import_rejects_future_version() {
        let store = ProfileStore::open(temp_path(), "kicks").await.unwrap();
        let mut backup = store.export_backup().await;
        backup.version = BACKUP_VERSION + 1;
        assert!(matches!(
            store.import_backup(backup).await,
            Err(ImportError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[tokio::test]
    async fn test_import_rejects_invalid_holdings() {
        let store = ProfileStore::open(temp_path(), "kicks").await.unwrap();
        store.add_item(make_item("a", 100)).await.unwrap();

        let mut backup = store.export_backup().await;
        backup.profile.owned.push(make_item("b", -40));
        assert!(matches!(
            store.import_backup(backup).await,
            Err(ImportError::Invalid(ValidationError::Negative { field: "purchase_price", .. }))
        ));

        let profile = store.snapshot().await;
        assert_eq!(profile.owned.len(), 1);
        assert_eq!(profile.owned[0].sneaker_id, "a");
    }

    #[tokio::test]
    async fn test_failed_write_leaves_profile_unchanged() {
        let path = temp_path();
        let store = ProfileStore::open(&path, "kicks").await.unwrap();
        let kept = store.add_item(make_item("a", 100)).await.unwrap();

        // A directory where the file should go makes every write fail.
        tokio::fs::remove_file(&path).await.unwrap();
        tokio::fs::create_dir_all(&path).await.unwrap();

        assert!(store.add_item(make_item("b", 200)).await.is_err());
        assert!(store.toggle_wishlist("b").await.is_err());
        assert!(store.remove_item(kept.id).await.is_err());
        assert!(store.reset().await.is_err());

        let profile = store.snapshot().await;
        assert_eq!(profile.owned, vec![kept]);
        assert!(profile.wishlist.is_empty());
    }
}
