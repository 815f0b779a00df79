//! Post - Content Items and Their Publishing Lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::{Record, Value};
use crate::utils::format::format_date;

/// Publishing status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

/// A content post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub category: String,
    pub status: PostStatus,
    #[serde(default)]
    pub views: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Draft → published
    pub fn publish(&mut self) -> bool {
        self.transition(PostStatus::Draft, PostStatus::Published)
    }

    /// Published → archived
    pub fn archive(&mut self) -> bool {
        self.transition(PostStatus::Published, PostStatus::Archived)
    }

    /// Archived → published
    pub fn restore(&mut self) -> bool {
        self.transition(PostStatus::Archived, PostStatus::Published)
    }

    fn transition(&mut self, from: PostStatus, to: PostStatus) -> bool {
        if self.status != from {
            return false;
        }
        self.status = to;
        true
    }

    /// Table row for this post
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id)
            .with("title", self.title.as_str())
            .with("author", self.author.as_str())
            .with("category", self.category.as_str())
            .with("status", self.status.as_str())
            .with("views", self.views)
            .with("createdAt", format_date(&self.created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Post {
        Post {
            id: 7,
            title: "Hello".into(),
            author: "lee".into(),
            category: "design".into(),
            status: PostStatus::Draft,
            views: None,
            created_at: DateTime::from_timestamp(0, 0).unwrap_or_default(),
        }
    }

    #[test]
    fn lifecycle_follows_draft_published_archived() {
        let mut post = draft();
        assert!(!post.archive());
        assert!(!post.restore());
        assert!(post.publish());
        assert_eq!(post.status, PostStatus::Published);
        assert!(!post.publish());
        assert!(post.archive());
        assert_eq!(post.status, PostStatus::Archived);
        assert!(post.restore());
        assert_eq!(post.status, PostStatus::Published);
    }

    #[test]
    fn record_carries_optional_views() {
        let record = draft().to_record();
        assert_eq!(record.id(), Value::from(7u64));
        assert!(record.value("views").is_null());
        assert_eq!(record.value("status"), &Value::from("draft"));
    }
}
