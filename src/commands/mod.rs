//! Command implementations for ipa-report CLI

pub mod analyze;
