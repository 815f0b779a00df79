//! Management Controller
//!
//! Applies table events to the management state and builds the handler
//! sets handed to each table.

use gpui::App;

use crate::app::entities::AppEntities;
use crate::domain::post::PostStatus;
use crate::state::management_state::{ActiveTab, ManagementState};
use crate::table::{Record, TableHandlers, Value};

/// Management page controller
#[derive(Clone)]
pub struct ManagementController {
    entities: AppEntities,
}

impl ManagementController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    fn update(&self, cx: &mut App, f: impl FnOnce(&mut ManagementState) -> bool) {
        self.entities.management.update(cx, |state, cx| {
            if f(state) {
                cx.notify();
            }
        });
    }

    pub fn select_tab(&self, tab: ActiveTab, cx: &mut App) {
        self.update(cx, |state| {
            if state.active_tab() == tab {
                return false;
            }
            state.set_active_tab(tab);
            true
        });
    }

    pub fn edit(&self, record: &Record, cx: &mut App) {
        tracing::info!(id = %record.id().display_text(), "edit requested");
        self.update(cx, |state| {
            state.begin_edit(record);
            true
        });
    }

    pub fn delete_user(&self, id: &Value, cx: &mut App) {
        tracing::info!(id = %id.display_text(), "deleting user");
        self.update(cx, |state| state.delete_user(id));
    }

    pub fn delete_post(&self, id: &Value, cx: &mut App) {
        tracing::info!(id = %id.display_text(), "deleting post");
        self.update(cx, |state| state.delete_post(id));
    }

    /// Move a post along its lifecycle; rejected steps leave it untouched
    pub fn set_post_status(&self, id: &Value, status: PostStatus, cx: &mut App) {
        tracing::info!(id = %id.display_text(), status = status.as_str(), "changing post status");
        self.update(cx, |state| state.set_post_status(id, status));
    }

    /// Handlers for the users table
    pub fn user_handlers(&self) -> TableHandlers<App> {
        let edit = self.clone();
        let delete = self.clone();
        TableHandlers::<App>::new()
            .on_edit(move |record, cx| edit.edit(record, cx))
            .on_delete(move |id, cx| delete.delete_user(id, cx))
    }

    /// Handlers for the posts table
    pub fn post_handlers(&self) -> TableHandlers<App> {
        let edit = self.clone();
        let delete = self.clone();
        let publish = self.clone();
        let archive = self.clone();
        let restore = self.clone();
        TableHandlers::<App>::new()
            .on_row_click(|record, _cx| {
                tracing::debug!(id = %record.id().display_text(), "post row clicked");
            })
            .on_edit(move |record, cx| edit.edit(record, cx))
            .on_delete(move |id, cx| delete.delete_post(id, cx))
            .on_publish(move |id, cx| publish.set_post_status(id, PostStatus::Published, cx))
            .on_archive(move |id, cx| archive.set_post_status(id, PostStatus::Archived, cx))
            .on_restore(move |id, cx| restore.set_post_status(id, PostStatus::Published, cx))
    }
}
