//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en-US")]
    EnUS,
    /// Korean
    #[serde(rename = "ko-KR")]
    KoKR,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::KoKR => "한국어",
        }
    }

    /// The other locale
    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUS => Locale::KoKR,
            Locale::KoKR => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, ko))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Admin Console", "관리 콘솔"));

    // Management page
    map.insert("tab-users", ("Users", "사용자"));
    map.insert("tab-posts", ("Posts", "게시글"));
    map.insert("management-title", ("Management", "관리"));
    map.insert("showcase-title", ("Button Component Examples", "버튼 컴포넌트 예시"));
    map.insert("showcase-variants", ("Variants", "종류"));
    map.insert("showcase-sizes", ("Sizes", "크기"));
    map.insert("showcase-disabled", ("Disabled", "비활성"));

    // Button showcase labels
    map.insert("variant-primary", ("Primary", "기본"));
    map.insert("variant-secondary", ("Secondary", "보조"));
    map.insert("variant-danger", ("Danger", "위험"));
    map.insert("variant-success", ("Success", "성공"));
    map.insert("variant-outline", ("Outline", "외곽선"));
    map.insert("variant-ghost", ("Ghost", "고스트"));
    map.insert("variant-link", ("Link", "링크"));
    map.insert("size-small", ("Small", "작은 버튼"));
    map.insert("size-medium", ("Medium", "보통 버튼"));
    map.insert("size-large", ("Large", "큰 버튼"));

    // Row actions
    map.insert("action-edit", ("Edit", "수정"));
    map.insert("action-delete", ("Delete", "삭제"));
    map.insert("action-publish", ("Publish", "게시"));
    map.insert("action-archive", ("Archive", "보관"));
    map.insert("action-restore", ("Restore", "복원"));

    // Table
    map.insert("table-search", ("Search...", "검색..."));
    map.insert("table-no-data", ("No data", "데이터 없음"));
    map.insert("table-prev", ("Previous", "이전"));
    map.insert("table-next", ("Next", "다음"));
    map.insert("table-items", ("items", "건"));

    // User columns
    map.insert("col-id", ("ID", "ID"));
    map.insert("col-username", ("Username", "사용자명"));
    map.insert("col-email", ("Email", "이메일"));
    map.insert("col-role", ("Role", "역할"));
    map.insert("col-status", ("Status", "상태"));
    map.insert("col-created-at", ("Created", "생성일"));
    map.insert("col-last-login", ("Last Login", "마지막 로그인"));
    map.insert("col-actions", ("Actions", "관리"));

    // Post columns
    map.insert("col-title", ("Title", "제목"));
    map.insert("col-author", ("Author", "작성자"));
    map.insert("col-category", ("Category", "카테고리"));
    map.insert("col-views", ("Views", "조회수"));

    // Notices
    map.insert("notice-edit", ("Editing", "수정 중"));
    map.insert("notice-deleted", ("Deleted", "삭제됨"));
    map.insert("notice-status", ("Status changed", "상태 변경됨"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, ko)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::KoKR => SharedString::from(ko),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
