use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use warden_core::write_text_atomic;

/// Shared handle to the single store instance constructed at process start.
///
/// The command gateway only reads through it; the Discord runtime performs
/// mutations. The lock is never held across an await point.
pub type SharedRoleStore = Arc<Mutex<RoleStore>>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RoleStoreRecord {
    #[serde(default)]
    allowed_role_ids: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of [`RoleStore::add`].
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of [`RoleStore::remove`].
pub enum RemoveOutcome {
    Removed,
    NotPresent,
}

/// Persisted allow-list of role ids permitted to run administrative commands.
///
/// The store is the single writer to its durable record; every mutation
/// rewrites the full list atomically so the file on disk is always a complete
/// record and can be trusted as source of truth on restart.
pub struct RoleStore {
    path: PathBuf,
    record: RoleStoreRecord,
}

impl RoleStore {
    /// Loads the allow-list from `path`.
    ///
    /// A missing file is not an error: the store starts empty and the record
    /// is recreated right away. A malformed file is logged and the in-memory
    /// list resets to empty; the file itself is left in place until the next
    /// successful mutation overwrites it.
    pub fn load(path: PathBuf) -> Result<Self> {
        let record = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read role store file {}", path.display()))?;
            match serde_json::from_str::<RoleStoreRecord>(&raw) {
                Ok(record) => record,
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "malformed role store file; starting with an empty allow-list"
                    );
                    RoleStoreRecord::default()
                }
            }
        } else {
            let store = Self {
                path,
                record: RoleStoreRecord::default(),
            };
            store.save()?;
            return Ok(store);
        };
        Ok(Self { path, record })
    }

    /// True iff any of `role_ids` is on the allow-list. No side effects.
    pub fn is_authorized(&self, role_ids: &[u64]) -> bool {
        role_ids
            .iter()
            .any(|id| self.record.allowed_role_ids.contains(id))
    }

    /// Appends `id` if absent and persists the full list.
    pub fn add(&mut self, id: u64) -> Result<AddOutcome> {
        if self.record.allowed_role_ids.contains(&id) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        self.record.allowed_role_ids.push(id);
        self.save()?;
        Ok(AddOutcome::Added)
    }

    /// Removes `id` if present and persists. Removing an absent id is a no-op
    /// and writes nothing.
    pub fn remove(&mut self, id: u64) -> Result<RemoveOutcome> {
        let before = self.record.allowed_role_ids.len();
        self.record.allowed_role_ids.retain(|known| *known != id);
        if self.record.allowed_role_ids.len() == before {
            return Ok(RemoveOutcome::NotPresent);
        }
        self.save()?;
        Ok(RemoveOutcome::Removed)
    }

    /// Current allow-list in insertion order. The order carries no semantics
    /// but stays stable for display.
    pub fn role_ids(&self) -> &[u64] {
        &self.record.allowed_role_ids
    }

    fn save(&self) -> Result<()> {
        let mut payload = serde_json::to_string_pretty(&self.record)
            .context("failed to serialize role store record")?;
        payload.push('\n');
        write_text_atomic(&self.path, &payload)
            .with_context(|| format!("failed to write role store file {}", self.path.display()))?;
        Ok(())
    }
}

/// Wraps a freshly loaded store in the shared handle handed to the runtime.
pub fn shared(store: RoleStore) -> SharedRoleStore {
    Arc::new(Mutex::new(store))
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> RoleStore {
        RoleStore::load(dir.path().join("admin_roles.json")).expect("load")
    }

    #[test]
    fn add_then_authorized_then_remove() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);
        assert!(!store.is_authorized(&[42]));
        assert_eq!(store.add(42).expect("add"), AddOutcome::Added);
        assert!(store.is_authorized(&[42]));
        assert!(store.is_authorized(&[7, 42, 9]));
        assert_eq!(store.remove(42).expect("remove"), RemoveOutcome::Removed);
        assert!(!store.is_authorized(&[42]));
    }

    #[test]
    fn add_is_idempotent_on_the_set() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);
        assert_eq!(store.add(1).expect("add"), AddOutcome::Added);
        assert_eq!(store.add(1).expect("re-add"), AddOutcome::AlreadyPresent);
        assert_eq!(store.role_ids(), &[1]);
    }

    #[test]
    fn remove_missing_id_reports_not_present() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);
        assert_eq!(store.remove(5).expect("remove"), RemoveOutcome::NotPresent);
    }

    #[test]
    fn persisted_list_round_trips_in_insertion_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("admin_roles.json");
        {
            let mut store = RoleStore::load(path.clone()).expect("load");
            store.add(30).expect("add");
            store.add(10).expect("add");
            store.add(20).expect("add");
        }
        let reloaded = RoleStore::load(path).expect("reload");
        assert_eq!(reloaded.role_ids(), &[30, 10, 20]);
    }

    #[test]
    fn missing_file_starts_empty_and_recreates_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("admin_roles.json");
        let store = RoleStore::load(path.clone()).expect("load");
        assert!(store.role_ids().is_empty());
        let raw = read_to_string(&path).expect("record recreated");
        assert!(raw.contains("allowed_role_ids"));
    }

    #[test]
    fn malformed_file_resets_list_and_leaves_file_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("admin_roles.json");
        std::fs::write(&path, "not json at all").expect("seed malformed file");
        let store = RoleStore::load(path.clone()).expect("load");
        assert!(store.role_ids().is_empty());
        assert_eq!(read_to_string(&path).expect("read"), "not json at all");
    }

    #[test]
    fn mutation_overwrites_malformed_file_with_full_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("admin_roles.json");
        std::fs::write(&path, "{ broken").expect("seed malformed file");
        let mut store = RoleStore::load(path.clone()).expect("load");
        store.add(99).expect("add");
        let reloaded = RoleStore::load(path).expect("reload");
        assert_eq!(reloaded.role_ids(), &[99]);
    }
}
