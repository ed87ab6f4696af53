//! Shared helpers used across modules

pub mod path_normalizer;
