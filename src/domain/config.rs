//! Config - Application Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;
use crate::table::{PagePolicy, TableOptions};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// UI locale
    pub locale: Locale,
    /// JSON file with users and posts to load instead of the built-in sample
    pub seed_file: Option<PathBuf>,
    /// Table behavior
    pub table: TableConfig,
    /// Main window size
    pub window: WindowConfig,
}

/// Table behavior shared by the management tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page
    pub page_size: usize,
    /// Show the search box
    pub searchable: bool,
    /// Allow header sorting
    pub sortable: bool,
    /// Page handling when search results shrink
    pub page_policy: PagePolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        let defaults = TableOptions::default();
        Self {
            page_size: defaults.page_size,
            searchable: true,
            sortable: true,
            page_policy: defaults.page_policy,
        }
    }
}

impl TableConfig {
    /// Table options for these settings; the entity kind is left to the caller
    pub fn options(&self) -> TableOptions {
        TableOptions {
            page_size: self.page_size.max(1),
            searchable: self.searchable,
            sortable: self.sortable,
            entity_kind: None,
            page_policy: self.page_policy,
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}
