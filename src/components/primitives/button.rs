//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::AdminColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (blue)
    #[default]
    Primary,
    /// Secondary button (gray)
    Secondary,
    /// Destructive action (red)
    Danger,
    /// Positive action (green)
    Success,
    /// Bordered, transparent fill
    Outline,
    /// Transparent, no border
    Ghost,
    /// Looks like a text link
    Link,
}

impl ButtonVariant {
    /// Every variant, in showcase order
    pub const ALL: [ButtonVariant; 7] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Danger,
        ButtonVariant::Success,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "Primary",
            ButtonVariant::Secondary => "Secondary",
            ButtonVariant::Danger => "Danger",
            ButtonVariant::Success => "Success",
            ButtonVariant::Outline => "Outline",
            ButtonVariant::Ghost => "Ghost",
            ButtonVariant::Link => "Link",
        }
    }

    /// Background, text and hover background
    fn colors(self) -> (Rgba, Rgba, Rgba) {
        let clear = gpui::rgba(0x00000000);
        match self {
            ButtonVariant::Primary => (
                AdminColors::button_primary_bg(),
                AdminColors::text_light(),
                AdminColors::button_primary_hover(),
            ),
            ButtonVariant::Secondary => (
                AdminColors::button_secondary_bg(),
                AdminColors::text_primary(),
                AdminColors::button_secondary_hover(),
            ),
            ButtonVariant::Danger => (
                AdminColors::button_danger_bg(),
                AdminColors::text_light(),
                AdminColors::button_danger_hover(),
            ),
            ButtonVariant::Success => (
                AdminColors::button_success_bg(),
                AdminColors::text_light(),
                AdminColors::button_success_hover(),
            ),
            ButtonVariant::Outline | ButtonVariant::Ghost => (
                clear,
                AdminColors::text_primary(),
                AdminColors::button_subtle_hover(),
            ),
            ButtonVariant::Link => (clear, AdminColors::accent(), clear),
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
    /// Square button for a single glyph
    Icon,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 4] = [
        ButtonSize::Small,
        ButtonSize::Medium,
        ButtonSize::Large,
        ButtonSize::Icon,
    ];
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a secondary button
    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Danger)
    }

    /// Create an outline button
    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = self.variant.colors();

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (px(8.0), px(4.0), px(12.0)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(14.0)),
            ButtonSize::Large => (px(24.0), px(12.0), px(16.0)),
            ButtonSize::Icon => (px(8.0), px(8.0), px(14.0)),
        };

        let opacity = if self.disabled { 0.5 } else { 1.0 };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .px(padding_x)
            .py(padding_y)
            .bg(bg_color)
            .text_color(text_color)
            .text_size(font_size)
            .rounded_md()
            .opacity(opacity)
            .when(self.size == ButtonSize::Icon, |el| el.size(px(36.0)))
            .when(self.variant == ButtonVariant::Outline, |el| {
                el.border_1().border_color(AdminColors::border())
            })
            .when(self.variant == ButtonVariant::Link, |el| el.underline())
            .child(self.label);

        if !self.disabled {
            element = element.cursor_pointer().hover(move |s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
