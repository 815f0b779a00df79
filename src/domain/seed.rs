//! Seed - Initial Users and Posts
//!
//! Data shown when the console starts: either a JSON file named in the
//! settings or the built-in sample set.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::domain::post::{Post, PostStatus};
use crate::domain::user::{User, UserRole, UserStatus};
use crate::error::{InvalidSnafu, IoSnafu, Result};

/// Users and posts managed by the console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
}

fn first_duplicate(ids: impl Iterator<Item = u64>) -> Option<u64> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

impl SeedData {
    /// Load seed data from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).context(IoSnafu { path })?;
        let data: SeedData = serde_json::from_str(&content)?;
        data.validate()?;
        Ok(data)
    }

    /// Row ids must be unique per entity, table actions address rows by id
    pub fn validate(&self) -> Result<()> {
        if let Some(id) = first_duplicate(self.users.iter().map(|u| u.id)) {
            return InvalidSnafu {
                message: format!("duplicate user id {id}"),
            }
            .fail();
        }
        if let Some(id) = first_duplicate(self.posts.iter().map(|p| p.id)) {
            return InvalidSnafu {
                message: format!("duplicate post id {id}"),
            }
            .fail();
        }
        Ok(())
    }

    /// Built-in sample data
    pub fn sample() -> Self {
        const DAY: i64 = 86_400;
        let base = 1_704_067_200; // 2024-01-01

        let user = |id: u64, name: &str, role, status, login: Option<i64>| User {
            id,
            username: name.to_string(),
            email: format!("{name}@example.com"),
            role,
            status,
            created_at: ts(base + id as i64 * DAY),
            last_login: login.map(ts),
        };

        let users = vec![
            user(1, "admin", UserRole::Admin, UserStatus::Active, Some(base + 120 * DAY)),
            user(2, "jihoon", UserRole::Moderator, UserStatus::Active, Some(base + 118 * DAY)),
            user(3, "minji", UserRole::User, UserStatus::Inactive, None),
            user(4, "seoyeon", UserRole::User, UserStatus::Active, Some(base + 95 * DAY)),
            user(5, "guest01", UserRole::Guest, UserStatus::Suspended, None),
            user(6, "dohyun", UserRole::User, UserStatus::Active, Some(base + 110 * DAY)),
        ];

        let categories = ["development", "design", "accessibility", "news"];
        let statuses = [PostStatus::Draft, PostStatus::Published, PostStatus::Archived];
        let titles = [
            "Getting started with Rust",
            "Designing accessible forms",
            "Color contrast checklist",
            "Release notes",
            "Typed table rendering",
            "Layout atoms in practice",
            "Keyboard navigation tips",
            "Quarterly update",
            "Error handling patterns",
            "Spacing and rhythm",
            "Screen reader testing",
            "Community meetup",
            "Async in the UI thread",
            "Button variants explained",
        ];

        let posts = titles
            .iter()
            .enumerate()
            .map(|(i, title)| Post {
                id: i as u64 + 1,
                title: (*title).to_string(),
                author: users[i % users.len()].username.clone(),
                category: categories[i % categories.len()].to_string(),
                status: statuses[i % statuses.len()],
                views: (i % 5 != 4).then_some((i as u64 * 7919) % 25_000),
                created_at: ts(base + i as i64 * 3 * DAY),
            })
            .collect();

        Self { users, posts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_spans_more_than_one_page() {
        let seed = SeedData::sample();
        assert!(seed.posts.len() > 10);
        assert!(seed.posts.iter().any(|p| p.views.is_none()));
        assert!(seed.posts.iter().any(|p| p.status == PostStatus::Draft));
        assert!(seed.users.iter().any(|u| u.status == UserStatus::Inactive));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut seed = SeedData::sample();
        assert!(seed.validate().is_ok());
        let copy = seed.posts[0].clone();
        seed.posts.push(copy);
        assert!(matches!(seed.validate(), Err(crate::error::Error::Invalid { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = SeedData::load(Path::new("/nonexistent/seed.json"));
        assert!(matches!(result, Err(crate::error::Error::Io { .. })));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let seed: SeedData = serde_json::from_str(r#"{"users": []}"#).expect("valid json");
        assert!(seed.users.is_empty());
        assert!(seed.posts.is_empty());
    }
}
