//! Stack Component
//!
//! Lays children out in a row or a column with a uniform gap.

use gpui::{
    div, prelude::*, px, AnyElement, App, IntoElement, ParentElement, RenderOnce, Styled, Window,
};

/// Main axis of a stack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StackDirection {
    Row,
    #[default]
    Column,
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StackAlign {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

#[derive(IntoElement)]
pub struct Stack {
    direction: StackDirection,
    gap: f32,
    align: StackAlign,
    wrap: bool,
    children: Vec<AnyElement>,
}

impl Stack {
    pub fn new(direction: StackDirection) -> Self {
        Self {
            direction,
            gap: 8.0,
            align: StackAlign::default(),
            wrap: false,
            children: Vec::new(),
        }
    }

    pub fn row() -> Self {
        Self::new(StackDirection::Row).align(StackAlign::Center)
    }

    pub fn column() -> Self {
        Self::new(StackDirection::Column)
    }

    /// Gap between children in pixels
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn align(mut self, align: StackAlign) -> Self {
        self.align = align;
        self
    }

    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl IntoElement>) -> Self {
        self.children
            .extend(children.into_iter().map(IntoElement::into_any_element));
        self
    }
}

impl RenderOnce for Stack {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let base = div().flex().gap(px(self.gap));
        let base = match self.direction {
            StackDirection::Row => base.flex_row(),
            StackDirection::Column => base.flex_col(),
        };
        let base = match self.align {
            StackAlign::Start => base.items_start(),
            StackAlign::Center => base.items_center(),
            StackAlign::End => base.items_end(),
            StackAlign::Stretch => base,
        };

        base.when(self.wrap, |el| el.flex_wrap())
            .children(self.children)
    }
}
