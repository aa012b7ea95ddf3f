//! Pack operation
//!
//! Collects modules and bundles from a set of roots into a single archive,
//! optionally verifying scripts on the way.
//!
//! - context: shared run state and early abort
//! - bundles: standalone configuration bundles
//! - modules: top-level modules and their submodule trees
//! - assets: per-module asset classes
//! - orchestrator: joins both branches and finalizes the archive

pub mod assets;
pub mod bundles;
pub mod context;
pub mod modules;
pub mod orchestrator;

pub use orchestrator::PackOperation;
