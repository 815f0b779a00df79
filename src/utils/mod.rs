//! Utils - Formatting and Settings Storage

pub mod config_store;
pub mod format;
