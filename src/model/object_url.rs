// SPDX-License-Identifier: MPL-2.0
//! Revocable `blob:` handles standing for local files.
//!
//! The viewer never hands raw paths to loaders. It registers the file and
//! passes the URL around; a load that runs after the URL was revoked fails
//! with [`LoadError::Revoked`](super::LoadError::Revoked).

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const URL_PREFIX: &str = "blob:model-lens/";

#[derive(Debug, Default)]
struct Entries {
    next_id: u64,
    paths: HashMap<u64, PathBuf>,
}

/// Shared table of live object URLs. Cloning shares the table.
#[derive(Debug, Clone, Default)]
pub struct ObjectUrlRegistry {
    inner: Arc<Mutex<Entries>>,
}

impl ObjectUrlRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `path` and returns the owning handle.
    pub fn create(&self, path: PathBuf) -> ObjectUrl {
        let mut entries = self.lock();
        entries.next_id += 1;
        let id = entries.next_id;
        entries.paths.insert(id, path);
        ObjectUrl {
            id,
            url: format!("{URL_PREFIX}{id}"),
            registry: self.clone(),
        }
    }

    /// Returns the file behind `url` while it is still registered.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<PathBuf> {
        let id = parse_id(url)?;
        self.lock().paths.get(&id).cloned()
    }

    /// Number of live URLs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn revoke(&self, id: u64) {
        self.lock().paths.remove(&id);
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        // The table holds plain data, so a poisoned lock is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parse_id(url: &str) -> Option<u64> {
    url.strip_prefix(URL_PREFIX)?.parse().ok()
}

/// A registered URL. Dropping it revokes the URL.
pub struct ObjectUrl {
    id: u64,
    url: String,
    registry: ObjectUrlRegistry,
}

impl ObjectUrl {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectUrl").field(&self.url).finish()
    }
}

impl fmt::Display for ObjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        self.registry.revoke(self.id);
    }
}
