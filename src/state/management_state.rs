//! ManagementState - Users and Posts Under Management
//!
//! Owns the rows behind both management tables. Table handlers mutate this
//! state by row id; the page observes it and pushes fresh records into the
//! tables.

use crate::domain::post::{Post, PostStatus};
use crate::domain::seed::SeedData;
use crate::domain::user::User;
use crate::table::{Record, Value};

/// Which table the management page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Users,
    Posts,
}

impl ActiveTab {
    pub fn title_key(self) -> &'static str {
        match self {
            ActiveTab::Users => "tab-users",
            ActiveTab::Posts => "tab-posts",
        }
    }
}

/// Kind of the last change made through a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Editing,
    Deleted,
    StatusChanged,
}

impl NoticeKind {
    pub fn label_key(self) -> &'static str {
        match self {
            NoticeKind::Editing => "notice-edit",
            NoticeKind::Deleted => "notice-deleted",
            NoticeKind::StatusChanged => "notice-status",
        }
    }
}

/// Last change, shown above the tables
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub subject: String,
}

/// State for the management page
#[derive(Debug, Clone, Default)]
pub struct ManagementState {
    users: Vec<User>,
    posts: Vec<Post>,
    active_tab: ActiveTab,
    notice: Option<Notice>,
}

/// Numeric row id carried by a table event
fn row_id(id: &Value) -> Option<u64> {
    id.as_number()
        .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0)
        .map(|n| n as u64)
}

impl ManagementState {
    pub fn new(seed: SeedData) -> Self {
        Self {
            users: seed.users,
            posts: seed.posts,
            ..Self::default()
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn user_records(&self) -> Vec<Record> {
        self.users.iter().map(User::to_record).collect()
    }

    pub fn post_records(&self) -> Vec<Record> {
        self.posts.iter().map(Post::to_record).collect()
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    fn set_notice(&mut self, kind: NoticeKind, subject: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            subject: subject.into(),
        });
    }

    /// Record that a row was opened for editing
    pub fn begin_edit(&mut self, record: &Record) {
        let subject = ["username", "title"]
            .iter()
            .find_map(|key| record.get(key).filter(|v| !v.is_null()))
            .map(Value::display_text)
            .unwrap_or_else(|| record.id().display_text());
        self.set_notice(NoticeKind::Editing, subject);
    }

    /// Remove the user with `id`; false when no such user exists
    pub fn delete_user(&mut self, id: &Value) -> bool {
        let Some(id) = row_id(id) else {
            return false;
        };
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        let removed = self.users.len() != before;
        if removed {
            self.set_notice(NoticeKind::Deleted, format!("#{id}"));
        }
        removed
    }

    /// Remove the post with `id`; false when no such post exists
    pub fn delete_post(&mut self, id: &Value) -> bool {
        let Some(id) = row_id(id) else {
            return false;
        };
        let before = self.posts.len();
        self.posts.retain(|post| post.id != id);
        let removed = self.posts.len() != before;
        if removed {
            self.set_notice(NoticeKind::Deleted, format!("#{id}"));
        }
        removed
    }

    /// Move a post to `status` along its lifecycle: draft → published →
    /// archived → published. False when the post is missing or the step is
    /// not allowed from its current status.
    pub fn set_post_status(&mut self, id: &Value, status: PostStatus) -> bool {
        self.transition_post(id, |post| match status {
            PostStatus::Published => post.publish() || post.restore(),
            PostStatus::Archived => post.archive(),
            PostStatus::Draft => false,
        })
    }

    fn transition_post(&mut self, id: &Value, step: impl FnOnce(&mut Post) -> bool) -> bool {
        let Some(id) = row_id(id) else {
            return false;
        };
        let Some(post) = self.posts.iter_mut().find(|post| post.id == id) else {
            return false;
        };
        if !step(post) {
            tracing::debug!(id, status = post.status.as_str(), "post transition rejected");
            return false;
        }
        let status = post.status.as_str();
        self.set_notice(NoticeKind::StatusChanged, format!("#{id} → {status}"));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ManagementState {
        ManagementState::new(SeedData::sample())
    }

    fn post_status(state: &ManagementState, id: u64) -> PostStatus {
        state
            .posts()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.status)
            .unwrap()
    }

    #[test]
    fn starts_on_users_tab_without_notice() {
        let state = state();
        assert_eq!(state.active_tab(), ActiveTab::Users);
        assert!(state.notice().is_none());
        assert_eq!(state.user_records().len(), state.users().len());
    }

    #[test]
    fn delete_user_by_id() {
        let mut state = state();
        let id = state.users()[0].id;
        let count = state.users().len();
        assert!(state.delete_user(&Value::from(id)));
        assert_eq!(state.users().len(), count - 1);
        assert_eq!(state.notice().unwrap().kind, NoticeKind::Deleted);
        assert!(!state.delete_user(&Value::from(id)));
    }

    #[test]
    fn non_numeric_ids_are_ignored() {
        let mut state = state();
        let count = state.posts().len();
        assert!(!state.delete_post(&Value::Null));
        assert!(!state.delete_post(&Value::from("abc")));
        assert!(!state.delete_post(&Value::from(1.5)));
        assert_eq!(state.posts().len(), count);
    }

    #[test]
    fn post_lifecycle_follows_status() {
        let mut state = state();
        let draft = state
            .posts()
            .iter()
            .find(|p| p.status == PostStatus::Draft)
            .map(|p| p.id)
            .unwrap();
        let id = Value::from(draft);

        assert!(!state.set_post_status(&id, PostStatus::Archived));
        assert_eq!(post_status(&state, draft), PostStatus::Draft);
        assert!(state.set_post_status(&id, PostStatus::Published));
        assert_eq!(post_status(&state, draft), PostStatus::Published);
        assert!(state.set_post_status(&id, PostStatus::Archived));
        assert_eq!(post_status(&state, draft), PostStatus::Archived);
        assert!(state.set_post_status(&id, PostStatus::Published));
        assert_eq!(post_status(&state, draft), PostStatus::Published);
        assert_eq!(state.notice().unwrap().kind, NoticeKind::StatusChanged);
    }

    #[test]
    fn rejected_status_changes_leave_posts_alone() {
        let mut state = state();
        let draft = state
            .posts()
            .iter()
            .find(|p| p.status == PostStatus::Draft)
            .map(|p| p.id)
            .unwrap();
        assert!(!state.set_post_status(&Value::from(draft), PostStatus::Draft));
        assert!(!state.set_post_status(&Value::from(9_999u64), PostStatus::Published));
        assert_eq!(post_status(&state, draft), PostStatus::Draft);
        assert!(state.notice().is_none());
    }

    #[test]
    fn edit_notice_names_the_row() {
        let mut state = state();
        let record = state.user_records().remove(0);
        state.begin_edit(&record);
        let notice = state.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Editing);
        assert_eq!(notice.subject, state.users()[0].username);
    }

    #[test]
    fn switching_tabs() {
        let mut state = state();
        state.set_active_tab(ActiveTab::Posts);
        assert_eq!(state.active_tab(), ActiveTab::Posts);
        assert_eq!(ActiveTab::Posts.title_key(), "tab-posts");
    }
}
