//! DataTable Component
//!
//! Renders a [`TableView`](crate::table::TableView) frame: search box,
//! sortable headers, the current page of rows and the pagination footer.
//! All row processing lives in [`crate::table`]; this entity only holds the
//! inputs and the view state and turns clicks into [`ViewAction`]s and
//! [`TableEvent`]s.

use gpui::{
    div, prelude::*, px, AnyElement, App, ClickEvent, Context, Entity, IntoElement,
    ParentElement, Render, SharedString, Styled, Subscription, Window,
};
use gpui_component::{
    h_flex,
    input::{Input, InputEvent, InputState},
    v_flex,
};

use super::column::apply_width;
use super::pagination::Pagination;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::{Button, ButtonSize, ButtonVariant};
use crate::i18n::{t, Locale};
use crate::table::pipeline::process_rows;
use crate::table::pagination::total_pages;
use crate::table::{
    build_view, ActionKind, CellContent, ColumnSpec, Record, TableEvent, TableHandlers,
    TableOptions, Value, ViewAction, ViewState, resolve_cell,
};
use crate::theme::colors::AdminColors;

const ROW_HEIGHT: f32 = 44.0;
const HEADER_HEIGHT: f32 = 40.0;

/// Button styling for a row action
fn action_variant(action: ActionKind) -> ButtonVariant {
    match action {
        ActionKind::Edit => ButtonVariant::Outline,
        ActionKind::Publish => ButtonVariant::Success,
        ActionKind::Archive => ButtonVariant::Secondary,
        ActionKind::Restore => ButtonVariant::Primary,
        ActionKind::Delete => ButtonVariant::Danger,
    }
}

/// DataTable component
pub struct DataTable {
    data: Vec<Record>,
    columns: Option<Vec<ColumnSpec>>,
    options: TableOptions,
    state: ViewState,
    handlers: TableHandlers<App>,
    locale: Locale,
    search_state: Entity<InputState>,
    _subscriptions: Vec<Subscription>,
}

impl DataTable {
    /// Create a new data table
    pub fn new(
        options: TableOptions,
        locale: Locale,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let search_state = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(t(locale, "table-search"))
        });

        let subscriptions = vec![cx.subscribe(&search_state, |this, state, event, cx| {
            if matches!(event, InputEvent::Change) {
                let term = state.read(cx).value().to_string();
                this.apply(ViewAction::Search(term), cx);
            }
        })];

        Self {
            data: Vec::new(),
            columns: None,
            options,
            state: ViewState::new(),
            handlers: TableHandlers::default(),
            locale,
            search_state,
            _subscriptions: subscriptions,
        }
    }

    /// Replace the records; the view state survives
    pub fn set_data(&mut self, data: Vec<Record>, cx: &mut Context<Self>) {
        self.data = data;
        self.reconcile();
        cx.notify();
    }

    /// Explicit columns, or `None` to derive them from the first record
    pub fn set_columns(&mut self, columns: Option<Vec<ColumnSpec>>, cx: &mut Context<Self>) {
        self.columns = columns;
        cx.notify();
    }

    pub fn set_options(&mut self, options: TableOptions, cx: &mut Context<Self>) {
        self.options = options;
        self.reconcile();
        cx.notify();
    }

    pub fn set_handlers(&mut self, handlers: TableHandlers<App>, cx: &mut Context<Self>) {
        self.handlers = handlers;
        cx.notify();
    }

    pub fn set_locale(&mut self, locale: Locale, window: &mut Window, cx: &mut Context<Self>) {
        self.locale = locale;
        self.search_state.update(cx, |state, cx| {
            state.set_placeholder(t(locale, "table-search"), window, cx);
        });
        cx.notify();
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    fn page_count(&self) -> usize {
        let rows = process_rows(&self.data, &self.state, &self.options);
        total_pages(rows.len(), self.options.page_size)
    }

    fn reconcile(&mut self) {
        let total = self.page_count();
        self.state = self.state.reconciled(total, self.options.page_policy);
    }

    /// Fold a user interaction into the view state
    fn apply(&mut self, action: ViewAction, cx: &mut Context<Self>) {
        tracing::debug!(?action, "table view action");
        let total = self.page_count();
        self.state = self.state.apply(action, total);
        self.reconcile();
        cx.notify();
    }

    fn emit(&mut self, event: TableEvent, cx: &mut Context<Self>) {
        let handlers = self.handlers.clone();
        if !handlers.dispatch(&event, cx) {
            tracing::debug!(?event, "table event without handler");
        }
    }

    /// Render the header row
    fn render_header(&self, columns: &[ColumnSpec], cx: &Context<Self>) -> impl IntoElement {
        let sort = self.state.sort();

        h_flex()
            .h(px(HEADER_HEIGHT))
            .w_full()
            .bg(AdminColors::table_header_bg())
            .border_b_1()
            .border_color(AdminColors::border())
            .children(columns.iter().map(|col| {
                let sortable = col.is_sortable(self.options.sortable);
                let arrow = sort
                    .filter(|s| s.column == col.key)
                    .map(|s| s.direction.arrow());

                let label = h_flex()
                    .gap_1()
                    .child(col.header.clone())
                    .when_some(arrow, |el, arrow| {
                        el.child(div().text_color(AdminColors::accent()).child(arrow))
                    });

                let cell = apply_width(
                    div()
                        .px_3()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(AdminColors::text_primary())
                        .overflow_hidden(),
                    col.width,
                )
                .child(label);

                if sortable {
                    let key = col.key.clone();
                    cell.id(SharedString::from(format!("header-{}", col.key)))
                        .cursor_pointer()
                        .hover(|s| s.text_color(AdminColors::accent()))
                        .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                            this.apply(ViewAction::SortBy(key.clone()), cx);
                        }))
                        .into_any_element()
                } else {
                    cell.into_any_element()
                }
            }))
    }

    /// Render a data row
    fn render_row(
        &self,
        record: &Record,
        index: usize,
        columns: &[ColumnSpec],
        cx: &Context<Self>,
    ) -> impl IntoElement {
        let bg = if index % 2 == 0 {
            AdminColors::content_bg()
        } else {
            AdminColors::table_row_alt()
        };
        let clickable = self.handlers.has_row_click();
        let row_record = record.clone();

        h_flex()
            .id(SharedString::from(format!("row-{index}")))
            .h(px(ROW_HEIGHT))
            .w_full()
            .bg(bg)
            .hover(|s| s.bg(AdminColors::table_row_hover()))
            .border_b_1()
            .border_color(AdminColors::border())
            .when(clickable, |el| {
                el.cursor_pointer()
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        this.emit(TableEvent::RowClicked(row_record.clone()), cx);
                    }))
            })
            .children(columns.iter().map(|col| {
                let content = resolve_cell(self.options.entity_kind, &col.key, record);
                apply_width(
                    div()
                        .px_3()
                        .text_sm()
                        .text_color(AdminColors::text_primary())
                        .overflow_hidden(),
                    col.width,
                )
                .child(self.render_cell(content, record, index, cx))
            }))
    }

    fn render_cell(
        &self,
        content: CellContent,
        record: &Record,
        index: usize,
        cx: &Context<Self>,
    ) -> AnyElement {
        match content {
            CellContent::RoleBadge { role } => Badge::role(&role).into_any_element(),
            CellContent::StatusBadge(status) => Badge::status(&status).into_any_element(),
            CellContent::CategoryBadge { label, tone } => {
                Badge::category(label, tone).into_any_element()
            }
            CellContent::Text(text) => div().child(text).into_any_element(),
            CellContent::Actions(actions) => h_flex()
                .gap_1()
                .children(actions.into_iter().map(|action| {
                    let record = record.clone();
                    Button::new(
                        SharedString::from(format!("row-{index}-{}", action.label_key())),
                        t(self.locale, action.label_key()),
                    )
                    .variant(action_variant(action))
                    .size(ButtonSize::Small)
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        cx.stop_propagation();
                        this.emit(TableEvent::for_action(action, &record), cx);
                    }))
                }))
                .into_any_element(),
            CellContent::Raw(Value::Element(factory)) => factory(),
            CellContent::Raw(value) => div().child(value.display_text()).into_any_element(),
        }
    }

    /// Render empty state
    fn render_empty(&self) -> impl IntoElement {
        div()
            .w_full()
            .py_8()
            .flex()
            .items_center()
            .justify_center()
            .text_color(AdminColors::text_muted())
            .child(t(self.locale, "table-no-data"))
    }
}

impl Render for DataTable {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let view = build_view(
            &self.data,
            self.columns.as_deref(),
            &self.state,
            &self.options,
        );
        let locale = self.locale;

        let body = if view.rows.is_empty() {
            self.render_empty().into_any_element()
        } else {
            v_flex()
                .w_full()
                .children(
                    view.rows
                        .iter()
                        .enumerate()
                        .map(|(index, record)| self.render_row(record, index, &view.columns, cx)),
                )
                .into_any_element()
        };

        v_flex()
            .w_full()
            .gap_3()
            .when(self.options.searchable, |el| {
                el.child(
                    div()
                        .w(px(280.0))
                        .child(Input::new(&self.search_state).cleanable(true)),
                )
            })
            .child(
                v_flex()
                    .w_full()
                    .bg(AdminColors::content_bg())
                    .border_1()
                    .border_color(AdminColors::border())
                    .rounded_md()
                    .overflow_hidden()
                    .child(self.render_header(&view.columns, cx))
                    .child(body)
                    .when(view.shows_pagination(), |el| {
                        el.child(
                            Pagination::new(
                                view.current_page,
                                view.total_pages,
                                view.filtered_count,
                            )
                            .items_label(t(locale, "table-items"))
                            .button_labels(t(locale, "table-prev"), t(locale, "table-next"))
                            .on_prev(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                this.apply(ViewAction::PrevPage, cx);
                            }))
                            .on_next(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                this.apply(ViewAction::NextPage, cx);
                            })),
                        )
                    }),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destructive_actions_stand_out() {
        assert_eq!(action_variant(ActionKind::Delete), ButtonVariant::Danger);
        assert_eq!(action_variant(ActionKind::Publish), ButtonVariant::Success);
        assert_ne!(action_variant(ActionKind::Edit), action_variant(ActionKind::Delete));
    }
}
