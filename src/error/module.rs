//! Module and bundle identity errors

use super::PackError;

/// Creates a duplicate module error
pub fn duplicate_module(name: impl Into<String>) -> PackError {
    PackError::DuplicateModule { name: name.into() }
}

/// Creates a duplicate bundle error
pub fn duplicate_bundle(path: impl Into<String>) -> PackError {
    PackError::DuplicateBundle { path: path.into() }
}

/// Creates an error for a module with more than one boot script
pub fn multiple_boot_scripts(module: impl Into<String>, count: usize) -> PackError {
    PackError::MultipleBootScripts {
        module: module.into(),
        count,
    }
}

/// Creates an error for a module directory reached twice
pub fn module_cycle(name: impl Into<String>, dir: impl Into<String>) -> PackError {
    PackError::ModuleCycle {
        name: name.into(),
        dir: dir.into(),
    }
}
