//! User - Admin-Managed User Accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::Record;
use crate::utils::format::{format_date, format_datetime};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Moderator,
    User,
    Guest,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Moderator => "moderator",
            UserRole::User => "user",
            UserRole::Guest => "guest",
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
            UserStatus::Suspended => "suspended",
        }
    }
}

/// A user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Table row for this user
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("id", self.id)
            .with("username", self.username.as_str())
            .with("email", self.email.as_str())
            .with("role", self.role.as_str())
            .with("status", self.status.as_str())
            .with("createdAt", format_date(&self.created_at))
            .with("lastLogin", self.last_login.as_ref().map(format_datetime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    #[test]
    fn record_uses_render_rule_keys() {
        let user = User {
            id: 3,
            username: "kim".into(),
            email: "kim@example.com".into(),
            role: UserRole::Moderator,
            status: UserStatus::Inactive,
            created_at: DateTime::from_timestamp(0, 0).unwrap_or_default(),
            last_login: None,
        };
        let record = user.to_record();
        assert_eq!(record.id(), Value::from(3u64));
        assert_eq!(record.value("role"), &Value::from("moderator"));
        assert_eq!(record.value("status"), &Value::from("inactive"));
        assert_eq!(record.value("createdAt"), &Value::from("1970-01-01"));
        assert!(record.value("lastLogin").is_null());
    }

    #[test]
    fn deserializes_camel_case() {
        let json = r#"{
            "id": 1,
            "username": "admin",
            "email": "admin@example.com",
            "role": "admin",
            "status": "active",
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).expect("valid user");
        assert_eq!(user.role, UserRole::Admin);
        assert!(user.last_login.is_none());
    }
}
