//! Pagination Component
//!
//! Footer with the filtered row count and previous / next buttons.

use gpui::{
    div, prelude::*, App, ClickEvent, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::theme::colors::AdminColors;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Pagination component
#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    total_pages: usize,
    total_items: usize,
    items_label: SharedString,
    prev_label: SharedString,
    next_label: SharedString,
    on_prev: Option<ClickHandler>,
    on_next: Option<ClickHandler>,
}

impl Pagination {
    /// Create a new pagination component
    pub fn new(current_page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            current_page,
            total_pages,
            total_items,
            items_label: "items".into(),
            prev_label: "Previous".into(),
            next_label: "Next".into(),
            on_prev: None,
            on_next: None,
        }
    }

    /// Set the items label
    pub fn items_label(mut self, label: impl Into<SharedString>) -> Self {
        self.items_label = label.into();
        self
    }

    /// Set the previous / next button labels
    pub fn button_labels(
        mut self,
        prev: impl Into<SharedString>,
        next: impl Into<SharedString>,
    ) -> Self {
        self.prev_label = prev.into();
        self.next_label = next.into();
        self
    }

    pub fn on_prev(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_prev = Some(Box::new(handler));
        self
    }

    pub fn on_next(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_next = Some(Box::new(handler));
        self
    }
}

fn nav_button(
    id: &'static str,
    label: SharedString,
    enabled: bool,
    handler: Option<ClickHandler>,
) -> Button {
    let button = Button::new(id, label)
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Small)
        .disabled(!enabled);
    match handler {
        Some(handler) => button.on_click(handler),
        None => button,
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let total = self.total_pages;
        let can_prev = current > 1;
        let can_next = current < total;

        div()
            .w_full()
            .px_4()
            .py_2()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(AdminColors::border())
            // Item count
            .child(
                div()
                    .text_sm()
                    .text_color(AdminColors::text_secondary())
                    .child(format!("{} {}", self.total_items, self.items_label)),
            )
            // Page navigation
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(nav_button("prev-page", self.prev_label, can_prev, self.on_prev))
                    .child(
                        div()
                            .text_sm()
                            .text_color(AdminColors::text_primary())
                            .child(format!("{} / {}", current, total)),
                    )
                    .child(nav_button("next-page", self.next_label, can_next, self.on_next)),
            )
    }
}
