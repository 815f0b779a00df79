//! Badge Components
//!
//! Small labelled pills used inside table cells.

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Styled,
    Window,
};

use crate::table::{BadgeStatus, BadgeTone};
use crate::theme::colors::{badge_fill, AdminColors};

/// Glyph and color for a user role
fn role_style(role: &str) -> (&'static str, Rgba) {
    match role {
        "admin" => ("★", AdminColors::danger()),
        "moderator" => ("◆", AdminColors::warning()),
        "user" => ("●", AdminColors::accent()),
        "guest" => ("○", AdminColors::neutral()),
        _ => ("•", AdminColors::neutral()),
    }
}

/// Glyph and color for a status
fn status_style(status: &BadgeStatus) -> (&'static str, Rgba) {
    match status {
        BadgeStatus::Published => ("✓", AdminColors::success()),
        BadgeStatus::Draft => ("✎", AdminColors::warning()),
        BadgeStatus::Archived => ("▣", AdminColors::neutral()),
        BadgeStatus::Pending => ("…", AdminColors::info()),
        BadgeStatus::Rejected => ("✕", AdminColors::danger()),
        BadgeStatus::Other(_) => ("•", AdminColors::neutral()),
    }
}

fn tone_color(tone: BadgeTone) -> Rgba {
    match tone {
        BadgeTone::Primary => AdminColors::accent(),
        BadgeTone::Info => AdminColors::info(),
        BadgeTone::Danger => AdminColors::danger(),
        BadgeTone::Secondary => AdminColors::neutral(),
    }
}

/// A colored pill with an optional leading glyph
#[derive(IntoElement)]
pub struct Badge {
    label: SharedString,
    glyph: Option<&'static str>,
    color: Rgba,
}

impl Badge {
    pub fn new(label: impl Into<SharedString>, color: Rgba) -> Self {
        Self {
            label: label.into(),
            glyph: None,
            color,
        }
    }

    pub fn glyph(mut self, glyph: &'static str) -> Self {
        self.glyph = Some(glyph);
        self
    }

    /// Role badge: admin, moderator, user or guest
    pub fn role(role: &str) -> Self {
        let (glyph, color) = role_style(role);
        Self::new(role.to_string(), color).glyph(glyph)
    }

    /// Status badge for users and posts
    pub fn status(status: &BadgeStatus) -> Self {
        let (glyph, color) = status_style(status);
        Self::new(status.as_str().to_string(), color).glyph(glyph)
    }

    /// Category pill
    pub fn category(label: impl Into<SharedString>, tone: BadgeTone) -> Self {
        Self::new(label, tone_color(tone))
    }
}

impl RenderOnce for Badge {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .items_center()
            .gap_1()
            .px_2()
            .py(px(2.0))
            .rounded_full()
            .bg(badge_fill(self.color))
            .text_color(self.color)
            .text_size(px(12.0))
            .font_weight(gpui::FontWeight::MEDIUM)
            .when_some(self.glyph, |el, glyph| el.child(glyph))
            .child(self.label)
    }
}
