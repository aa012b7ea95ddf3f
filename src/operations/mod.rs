//! Operations module
//!
//! High-level workflows coordinating discovery, the module registry, the
//! archive writer and the verifier. Commands call into these; they hold no
//! terminal I/O of their own beyond the progress reporter they are given.

pub mod pack;

pub use pack::PackOperation;
