use crate::persistence::snapshot::{self, SnapshotError};
use lru::LruCache;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("instance save dir create failed for {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("instance save read failed for {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("instance save write failed for {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("instance save backup failed for {}: {source}", .path.display())]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("instance save {} is invalid: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },
}

#[derive(Debug, Default)]
pub struct SnapshotValidationReport {
    pub files: usize,
    pub parsed: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
    pub missing_dir: bool,
}

/// On-disk instance saves, one `<id>.sav` per instance plus a `.bak` copy
/// of the previous save. Recently used snapshots stay in memory.
pub struct InstanceStore {
    dir: PathBuf,
    cache: LruCache<u32, String>,
}

impl InstanceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_cache_capacity(dir, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_cache_capacity(dir: impl Into<PathBuf>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            dir: dir.into(),
            cache: LruCache::new(capacity),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Returns the saved snapshot for an instance, or `None` if it was never
    /// saved. A missing or unreadable primary file falls back to the backup.
    pub fn load(&mut self, instance_id: u32) -> Result<Option<String>, StoreError> {
        if let Some(cached) = self.cache.get(&instance_id) {
            return Ok(Some(cached.clone()));
        }

        let path = self.instance_path(instance_id);
        let backup_path = self.backup_path(instance_id);
        let data = match read_snapshot(&path) {
            Ok(Some(data)) => Some(data),
            Ok(None) => read_snapshot(&backup_path)?,
            Err(err) => match read_snapshot(&backup_path) {
                Ok(Some(fallback)) => {
                    tracing::warn!(
                        instance_id,
                        error = %err,
                        "instance save unusable, using backup"
                    );
                    Some(fallback)
                }
                _ => return Err(err),
            },
        };

        if let Some(data) = &data {
            self.cache.put(instance_id, data.clone());
        }
        Ok(data)
    }

    pub fn save(&mut self, instance_id: u32, data: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|source| StoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.instance_path(instance_id);
        let backup_path = self.backup_path(instance_id);
        if path.exists() {
            fs::copy(&path, &backup_path).map_err(|source| StoreError::Backup {
                path: backup_path.clone(),
                source,
            })?;
        }
        fs::write(&path, data).map_err(|source| StoreError::Write {
            path: path.clone(),
            source,
        })?;
        self.cache.put(instance_id, data.to_string());
        tracing::debug!(instance_id, path = %path.display(), "instance saved");
        Ok(())
    }

    /// Ids of every instance with a primary save file, ascending.
    pub fn instance_ids(&self) -> Result<Vec<u32>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.dir.clone(),
                    source,
                })
            }
        };
        let mut ids: Vec<u32> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| save_file_id(&entry.path()))
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    pub fn validate_snapshots(&self) -> SnapshotValidationReport {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return SnapshotValidationReport {
                    missing_dir: true,
                    ..SnapshotValidationReport::default()
                };
            }
            Err(err) => {
                return SnapshotValidationReport {
                    errors: vec![format!(
                        "instance save dir read failed for {}: {}",
                        self.dir.display(),
                        err
                    )],
                    ..SnapshotValidationReport::default()
                };
            }
        };

        let mut report = SnapshotValidationReport::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    report.errors.push(format!(
                        "instance save dir entry failed for {}: {}",
                        self.dir.display(),
                        err
                    ));
                    continue;
                }
            };
            let path = entry.path();
            if save_file_id(&path).is_none() {
                report.skipped += 1;
                continue;
            }
            report.files += 1;
            match read_snapshot(&path) {
                Ok(_) => report.parsed += 1,
                Err(err) => report.errors.push(err.to_string()),
            }
        }
        report
    }

    fn instance_path(&self, instance_id: u32) -> PathBuf {
        self.dir.join(format!("{}.sav", instance_id))
    }

    fn backup_path(&self, instance_id: u32) -> PathBuf {
        self.dir.join(format!("{}.sav.bak", instance_id))
    }
}

fn save_file_id(path: &Path) -> Option<u32> {
    let is_save = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("sav"))
        .unwrap_or(false);
    if !is_save {
        return None;
    }
    path.file_stem()?.to_str()?.parse().ok()
}

/// Reads and validates one snapshot file. `Ok(None)` when it does not exist.
fn read_snapshot(path: &Path) -> Result<Option<String>, StoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    snapshot::decode(&data).map_err(|source| StoreError::Snapshot {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(data.trim().to_string()))
}
