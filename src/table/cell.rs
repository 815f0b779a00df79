//! Cell Rendering Rules
//!
//! Maps `(entity kind, column key)` to a [`CellRule`] and resolves each cell
//! of a record to a [`CellContent`] description. The GPUI layer only turns
//! these descriptions into elements; every decision about what a cell shows
//! lives here.
//!
//! Pairs without a rule (or tables without an entity kind) pass the raw value
//! through untouched.

use serde::{Deserialize, Serialize};

use super::record::{Record, Value};
use crate::utils::format::format_grouped;

/// Which domain-specific render rules apply to a table's rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// User accounts
    User,
    /// Content posts
    Post,
}

/// A special rendering rule for one column of one entity kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRule {
    UserRole,
    UserStatus,
    UserLastLogin,
    UserActions,
    PostCategory,
    PostStatus,
    PostViews,
    PostActions,
}

impl CellRule {
    /// Every rule, in lookup order
    pub const ALL: [CellRule; 8] = [
        CellRule::UserRole,
        CellRule::UserStatus,
        CellRule::UserLastLogin,
        CellRule::UserActions,
        CellRule::PostCategory,
        CellRule::PostStatus,
        CellRule::PostViews,
        CellRule::PostActions,
    ];

    pub fn entity(self) -> EntityKind {
        match self {
            CellRule::UserRole
            | CellRule::UserStatus
            | CellRule::UserLastLogin
            | CellRule::UserActions => EntityKind::User,
            CellRule::PostCategory
            | CellRule::PostStatus
            | CellRule::PostViews
            | CellRule::PostActions => EntityKind::Post,
        }
    }

    /// Column key the rule is bound to
    pub fn column(self) -> &'static str {
        match self {
            CellRule::UserRole => "role",
            CellRule::UserStatus | CellRule::PostStatus => "status",
            CellRule::UserLastLogin => "lastLogin",
            CellRule::UserActions | CellRule::PostActions => "actions",
            CellRule::PostCategory => "category",
            CellRule::PostViews => "views",
        }
    }

    /// Rule for a column of the given entity kind, if any
    pub fn lookup(kind: EntityKind, column: &str) -> Option<CellRule> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.entity() == kind && rule.column() == column)
    }
}

/// Status shown by a status badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeStatus {
    Published,
    Draft,
    Archived,
    Pending,
    Rejected,
    /// Any other status text, shown verbatim
    Other(String),
}

impl BadgeStatus {
    pub fn parse(status: &str) -> Self {
        match status {
            "published" => BadgeStatus::Published,
            "draft" => BadgeStatus::Draft,
            "archived" => BadgeStatus::Archived,
            "pending" => BadgeStatus::Pending,
            "rejected" => BadgeStatus::Rejected,
            other => BadgeStatus::Other(other.to_string()),
        }
    }

    /// User account status mapped onto badge statuses
    pub fn from_user_status(status: &Value) -> Self {
        match status.as_str() {
            Some("active") => BadgeStatus::Published,
            Some("inactive") => BadgeStatus::Draft,
            _ => BadgeStatus::Rejected,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BadgeStatus::Published => "published",
            BadgeStatus::Draft => "draft",
            BadgeStatus::Archived => "archived",
            BadgeStatus::Pending => "pending",
            BadgeStatus::Rejected => "rejected",
            BadgeStatus::Other(text) => text,
        }
    }
}

/// Visual tone of a categorical badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Primary,
    Info,
    Danger,
    Secondary,
}

impl BadgeTone {
    /// Tone for a post category
    pub fn for_category(category: &Value) -> Self {
        match category.as_str() {
            Some("development") => BadgeTone::Primary,
            Some("design") => BadgeTone::Info,
            Some("accessibility") => BadgeTone::Danger,
            _ => BadgeTone::Secondary,
        }
    }
}

/// A button in an actions cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Edit,
    Publish,
    Archive,
    Restore,
    Delete,
}

impl ActionKind {
    /// Translation key of the button label
    pub fn label_key(self) -> &'static str {
        match self {
            ActionKind::Edit => "action-edit",
            ActionKind::Publish => "action-publish",
            ActionKind::Archive => "action-archive",
            ActionKind::Restore => "action-restore",
            ActionKind::Delete => "action-delete",
        }
    }

    /// Lifecycle step offered for a post in `status`
    pub fn for_post_status(status: &Value) -> Option<ActionKind> {
        match status.as_str() {
            Some("draft") => Some(ActionKind::Publish),
            Some("published") => Some(ActionKind::Archive),
            Some("archived") => Some(ActionKind::Restore),
            _ => None,
        }
    }
}

/// What a single cell displays
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Role badge with a role icon
    RoleBadge { role: String },
    /// Status badge with a status icon
    StatusBadge(BadgeStatus),
    /// Pill badge for a category
    CategoryBadge { label: String, tone: BadgeTone },
    /// Plain text
    Text(String),
    /// Row action buttons, in display order
    Actions(Vec<ActionKind>),
    /// The record value, unchanged
    Raw(Value),
}

/// Resolve one cell of `record`
pub fn resolve_cell(kind: Option<EntityKind>, column: &str, record: &Record) -> CellContent {
    let value = record.value(column);
    let Some(rule) = kind.and_then(|kind| CellRule::lookup(kind, column)) else {
        return CellContent::Raw(value.clone());
    };

    match rule {
        CellRule::UserRole => CellContent::RoleBadge {
            role: value.display_text(),
        },
        CellRule::UserStatus => CellContent::StatusBadge(BadgeStatus::from_user_status(value)),
        CellRule::UserLastLogin => {
            if value.is_truthy() {
                CellContent::Raw(value.clone())
            } else {
                CellContent::Text("-".to_string())
            }
        }
        CellRule::UserActions => CellContent::Actions(vec![ActionKind::Edit, ActionKind::Delete]),
        CellRule::PostCategory => CellContent::CategoryBadge {
            label: value.display_text(),
            tone: BadgeTone::for_category(value),
        },
        CellRule::PostStatus => {
            CellContent::StatusBadge(BadgeStatus::parse(&value.display_text()))
        }
        CellRule::PostViews => CellContent::Text(format_views(value)),
        CellRule::PostActions => {
            let mut actions = vec![ActionKind::Edit];
            actions.extend(ActionKind::for_post_status(record.value("status")));
            actions.push(ActionKind::Delete);
            CellContent::Actions(actions)
        }
    }
}

fn format_views(value: &Value) -> String {
    if !value.is_truthy() {
        return "0".to_string();
    }
    match value {
        Value::Number(n) => format_grouped(*n),
        other => other.display_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_is_found_by_its_own_key() {
        for rule in CellRule::ALL {
            assert_eq!(CellRule::lookup(rule.entity(), rule.column()), Some(rule));
        }
        assert_eq!(CellRule::lookup(EntityKind::User, "views"), None);
        assert_eq!(CellRule::lookup(EntityKind::Post, "lastLogin"), None);
    }

    #[test]
    fn post_draft_offers_publish() {
        let row = Record::new().with("status", "draft").with("id", 7);
        assert_eq!(
            resolve_cell(Some(EntityKind::Post), "actions", &row),
            CellContent::Actions(vec![ActionKind::Edit, ActionKind::Publish, ActionKind::Delete])
        );
    }

    #[test]
    fn post_lifecycle_actions() {
        let published = Record::new().with("status", "published");
        let archived = Record::new().with("status", "archived");
        let unknown = Record::new().with("status", "pending");

        assert_eq!(
            resolve_cell(Some(EntityKind::Post), "actions", &published),
            CellContent::Actions(vec![ActionKind::Edit, ActionKind::Archive, ActionKind::Delete])
        );
        assert_eq!(
            resolve_cell(Some(EntityKind::Post), "actions", &archived),
            CellContent::Actions(vec![ActionKind::Edit, ActionKind::Restore, ActionKind::Delete])
        );
        assert_eq!(
            resolve_cell(Some(EntityKind::Post), "actions", &unknown),
            CellContent::Actions(vec![ActionKind::Edit, ActionKind::Delete])
        );
    }

    #[test]
    fn user_status_is_remapped() {
        let cell = |status: &str| {
            resolve_cell(
                Some(EntityKind::User),
                "status",
                &Record::new().with("status", status),
            )
        };
        assert_eq!(cell("inactive"), CellContent::StatusBadge(BadgeStatus::Draft));
        assert_eq!(cell("active"), CellContent::StatusBadge(BadgeStatus::Published));
        assert_eq!(cell("suspended"), CellContent::StatusBadge(BadgeStatus::Rejected));
    }

    #[test]
    fn post_status_passes_through() {
        let row = Record::new().with("status", "archived");
        assert_eq!(
            resolve_cell(Some(EntityKind::Post), "status", &row),
            CellContent::StatusBadge(BadgeStatus::Archived)
        );
        let row = Record::new().with("status", "scheduled");
        assert_eq!(
            resolve_cell(Some(EntityKind::Post), "status", &row),
            CellContent::StatusBadge(BadgeStatus::Other("scheduled".into()))
        );
    }

    #[test]
    fn views_are_grouped_or_zero() {
        let views = |value: Value| {
            resolve_cell(
                Some(EntityKind::Post),
                "views",
                &Record::new().with("views", value),
            )
        };
        assert_eq!(views(Value::from(1234)), CellContent::Text("1,234".into()));
        assert_eq!(views(Value::Null), CellContent::Text("0".into()));
        assert_eq!(views(Value::from(0)), CellContent::Text("0".into()));
        assert_eq!(
            resolve_cell(Some(EntityKind::Post), "views", &Record::new()),
            CellContent::Text("0".into())
        );
    }

    #[test]
    fn category_tones() {
        let tone = |category: &str| match resolve_cell(
            Some(EntityKind::Post),
            "category",
            &Record::new().with("category", category),
        ) {
            CellContent::CategoryBadge { tone, .. } => tone,
            other => panic!("unexpected cell {other:?}"),
        };
        assert_eq!(tone("development"), BadgeTone::Primary);
        assert_eq!(tone("design"), BadgeTone::Info);
        assert_eq!(tone("accessibility"), BadgeTone::Danger);
        assert_eq!(tone("news"), BadgeTone::Secondary);
    }

    #[test]
    fn last_login_placeholder() {
        let with_login = Record::new().with("lastLogin", "2024-01-05");
        assert_eq!(
            resolve_cell(Some(EntityKind::User), "lastLogin", &with_login),
            CellContent::Raw(Value::from("2024-01-05"))
        );
        assert_eq!(
            resolve_cell(Some(EntityKind::User), "lastLogin", &Record::new()),
            CellContent::Text("-".into())
        );
    }

    #[test]
    fn unmapped_cells_return_the_raw_value() {
        let row = Record::new().with("role", "admin").with("title", "Hello");
        assert_eq!(
            resolve_cell(None, "role", &row),
            CellContent::Raw(Value::from("admin"))
        );
        assert_eq!(
            resolve_cell(Some(EntityKind::Post), "title", &row),
            CellContent::Raw(Value::from("Hello"))
        );
        assert_eq!(
            resolve_cell(Some(EntityKind::User), "missing", &row),
            CellContent::Raw(Value::Null)
        );
    }

    #[test]
    fn elements_pass_through_untouched() {
        let element = Value::element(|| unreachable!());
        let row = Record::new().with("avatar", element.clone()).with("status", "active");

        for kind in [None, Some(EntityKind::User), Some(EntityKind::Post)] {
            match resolve_cell(kind, "avatar", &row) {
                CellContent::Raw(value) => assert_eq!(value, element),
                other => panic!("expected raw element, got {other:?}"),
            }
        }
        assert_ne!(
            CellContent::Raw(Value::element(|| unreachable!())),
            CellContent::Raw(element)
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let row = Record::new().with("status", "published").with("views", 99_999);
        for column in ["status", "views", "actions", "other"] {
            assert_eq!(
                resolve_cell(Some(EntityKind::Post), column, &row),
                resolve_cell(Some(EntityKind::Post), column, &row)
            );
        }
    }
}
