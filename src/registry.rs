//! Module registry and bundle namespace
//!
//! Both maps enforce identity uniqueness for a single run. Check and insert
//! happen in one critical section, so two collectors racing on the same name
//! always yield exactly one success and one duplicate error.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, duplicate_bundle, duplicate_module, module_cycle};

#[derive(Default)]
struct Modules {
    dirs: BTreeMap<String, PathBuf>,
    // canonical directory -> owning module name
    canonical: HashMap<PathBuf, String>,
}

/// Mapping from module identity to source directory
#[derive(Default)]
pub struct ModuleRegistry {
    inner: Mutex<Modules>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Modules> {
        // Entries are inserted whole, so a poisoned lock still holds a consistent map.
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Register a module directory under `name`
    ///
    /// Fails when the name is taken, or when the directory resolves to one
    /// that is already registered (a symbolic link back into the tree).
    pub fn register(&self, name: &str, dir: &Path) -> Result<()> {
        let canonical = dunce::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        let mut modules = self.lock();

        if modules.dirs.contains_key(name) {
            return Err(duplicate_module(name));
        }
        if modules.canonical.contains_key(&canonical) {
            return Err(module_cycle(name, canonical.display().to_string()));
        }

        modules.dirs.insert(name.to_string(), dir.to_path_buf());
        modules.canonical.insert(canonical, name.to_string());
        tracing::debug!(module = name, dir = %dir.display(), "registered module");
        Ok(())
    }

    /// Directory of a registered module
    pub fn get(&self, name: &str) -> Option<PathBuf> {
        self.lock().dirs.get(name).cloned()
    }

    /// All registered names, sorted
    pub fn keys(&self) -> Vec<String> {
        self.lock().dirs.keys().cloned().collect()
    }

    /// All registered modules with their directories, sorted by name
    pub fn entries(&self) -> Vec<(String, PathBuf)> {
        self.lock()
            .dirs
            .iter()
            .map(|(name, dir)| (name.clone(), dir.clone()))
            .collect()
    }
}

/// Namespace of configuration bundles keyed by archive path
#[derive(Default)]
pub struct BundleIndex {
    inner: Mutex<BTreeMap<String, PathBuf>>,
}

impl BundleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, PathBuf>> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Register a bundle file under its archive path
    pub fn register(&self, key: &str, file: &Path) -> Result<()> {
        let mut bundles = self.lock();
        if bundles.contains_key(key) {
            return Err(duplicate_bundle(key));
        }
        bundles.insert(key.to_string(), file.to_path_buf());
        tracing::debug!(bundle = key, file = %file.display(), "registered bundle");
        Ok(())
    }

    /// Source files of every registered bundle, in key order
    pub fn files(&self) -> Vec<PathBuf> {
        self.lock().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }
}
