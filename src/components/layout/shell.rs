//! Shell Component
//!
//! The outer frame: a header on top and a scrollable content column below.

use gpui::{
    div, prelude::*, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

use crate::theme::colors::AdminColors;

/// Application shell wrapper
#[derive(IntoElement)]
pub struct Shell {
    header: Option<AnyElement>,
    children: Vec<AnyElement>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            header: None,
            children: Vec::new(),
        }
    }

    /// Element pinned above the content
    pub fn header(mut self, header: impl IntoElement) -> Self {
        self.header = Some(header.into_any_element());
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for Shell {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(AdminColors::background())
            .text_color(AdminColors::text_primary())
            .children(self.header)
            .child(
                div()
                    .id("shell-content")
                    .flex_1()
                    .overflow_y_scroll()
                    .p_6()
                    .flex()
                    .flex_col()
                    .gap_6()
                    .children(self.children),
            )
    }
}
