//! Shared helpers used across collectors

pub mod path_normalizer;
