//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::seed::SeedData;
use crate::i18n::Locale;
use crate::state::{i18n_state::I18nState, management_state::ManagementState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Users and posts behind the management tables
    pub management: Entity<ManagementState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the startup locale and seed data
    pub fn init(locale: Locale, seed: SeedData, cx: &mut App) -> Self {
        Self {
            i18n: cx.new(|_| I18nState::new(locale)),
            management: cx.new(|_| ManagementState::new(seed)),
        }
    }
}
