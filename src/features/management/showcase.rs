//! Button Showcase
//!
//! Every button variant and size, plus the disabled state.

use gpui::{
    div, prelude::*, px, App, ClickEvent, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};

use crate::components::layout::stack::Stack;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::i18n::{t, Locale};
use crate::theme::colors::AdminColors;

fn variant_key(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "variant-primary",
        ButtonVariant::Secondary => "variant-secondary",
        ButtonVariant::Danger => "variant-danger",
        ButtonVariant::Success => "variant-success",
        ButtonVariant::Outline => "variant-outline",
        ButtonVariant::Ghost => "variant-ghost",
        ButtonVariant::Link => "variant-link",
    }
}

/// Translation key for a size label; `None` for the glyph-only icon size
fn size_key(size: ButtonSize) -> Option<&'static str> {
    match size {
        ButtonSize::Small => Some("size-small"),
        ButtonSize::Medium => Some("size-medium"),
        ButtonSize::Large => Some("size-large"),
        ButtonSize::Icon => None,
    }
}

fn size_label(locale: Locale, size: ButtonSize) -> SharedString {
    size_key(size)
        .map(|key| t(locale, key))
        .unwrap_or_else(|| SharedString::from("+"))
}

fn log_click(label: &'static str) -> impl Fn(&ClickEvent, &mut Window, &mut App) + 'static {
    move |_, _, _| tracing::info!(button = label, "showcase button clicked")
}

#[derive(IntoElement)]
pub struct ButtonShowcase {
    locale: Locale,
}

impl ButtonShowcase {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

fn section(title: SharedString, row: Stack) -> impl IntoElement {
    Stack::column()
        .gap(6.0)
        .child(
            div()
                .text_xs()
                .text_color(AdminColors::text_secondary())
                .child(title),
        )
        .child(row)
}

impl RenderOnce for ButtonShowcase {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let locale = self.locale;
        let label = |variant: ButtonVariant| t(locale, variant_key(variant));

        let variants = Stack::row().wrap().children(ButtonVariant::ALL.map(|variant| {
            Button::new(SharedString::from(format!("showcase-{}", variant.name())), label(variant))
                .variant(variant)
                .on_click(log_click(variant.name()))
        }));

        let sizes = Stack::row().children(ButtonSize::ALL.map(|size| {
            Button::new(
                SharedString::from(format!("showcase-size-{size:?}")),
                size_label(locale, size),
            )
            .size(size)
            .on_click(log_click(size_key(size).unwrap_or("size-icon")))
        }));

        let disabled = Stack::row()
            .child(
                Button::primary("showcase-disabled-primary", label(ButtonVariant::Primary))
                    .disabled(true),
            )
            .child(
                Button::danger("showcase-disabled-danger", label(ButtonVariant::Danger))
                    .disabled(true),
            )
            .child(
                Button::outline("showcase-disabled-outline", label(ButtonVariant::Outline))
                    .disabled(true),
            );

        div()
            .w_full()
            .p_4()
            .bg(AdminColors::content_bg())
            .border_1()
            .border_color(AdminColors::border())
            .rounded_md()
            .child(
                Stack::column()
                    .gap(16.0)
                    .child(
                        div()
                            .text_size(px(16.0))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(t(locale, "showcase-title")),
                    )
                    .child(section(t(locale, "showcase-variants"), variants))
                    .child(section(t(locale, "showcase-sizes"), sizes))
                    .child(section(t(locale, "showcase-disabled"), disabled)),
            )
    }
}
