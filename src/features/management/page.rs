//! Management Page
//!
//! Users and posts tabs, each backed by a [`DataTable`], and the button
//! showcase below them.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::DataTable;
use crate::components::layout::stack::Stack;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::features::management::controller::ManagementController;
use crate::features::management::showcase::ButtonShowcase;
use crate::i18n::{t, Locale};
use crate::state::management_state::ActiveTab;
use crate::table::{ColumnSpec, EntityKind, TableOptions};
use crate::theme::colors::AdminColors;

/// Management page component
pub struct ManagementPage {
    entities: AppEntities,
    controller: ManagementController,
    users_table: Entity<DataTable>,
    posts_table: Entity<DataTable>,
}

fn user_columns(locale: Locale) -> Vec<ColumnSpec> {
    let col = |key: &str, label: &str| ColumnSpec::new(key, t(locale, label).to_string());
    vec![
        col("id", "col-id").fixed_width(64.0),
        col("username", "col-username").flex_width(Some(120.0), None),
        col("email", "col-email").percent_width(22.0),
        col("role", "col-role").fixed_width(130.0),
        col("status", "col-status").fixed_width(130.0),
        col("createdAt", "col-created-at").fixed_width(120.0),
        col("lastLogin", "col-last-login").fixed_width(150.0),
        col("actions", "col-actions").fixed_width(160.0).sortable(false),
    ]
}

fn post_columns(locale: Locale) -> Vec<ColumnSpec> {
    let col = |key: &str, label: &str| ColumnSpec::new(key, t(locale, label).to_string());
    vec![
        col("id", "col-id").fixed_width(64.0),
        col("title", "col-title").flex_width(Some(200.0), None),
        col("author", "col-author").fixed_width(120.0),
        col("category", "col-category").fixed_width(130.0),
        col("status", "col-status").fixed_width(130.0),
        col("views", "col-views").fixed_width(90.0),
        col("createdAt", "col-created-at").fixed_width(120.0),
        col("actions", "col-actions").fixed_width(240.0).sortable(false),
    ]
}

impl ManagementPage {
    pub fn new(
        entities: AppEntities,
        options: TableOptions,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let controller = ManagementController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;
        let (users, posts) = {
            let state = entities.management.read(cx);
            (state.user_records(), state.post_records())
        };

        let users_table = cx.new(|cx| {
            let mut table = DataTable::new(
                TableOptions {
                    entity_kind: Some(EntityKind::User),
                    ..options.clone()
                },
                locale,
                window,
                cx,
            );
            table.set_columns(Some(user_columns(locale)), cx);
            table.set_handlers(controller.user_handlers(), cx);
            table.set_data(users, cx);
            table
        });

        let posts_table = cx.new(|cx| {
            let mut table = DataTable::new(
                TableOptions {
                    entity_kind: Some(EntityKind::Post),
                    ..options
                },
                locale,
                window,
                cx,
            );
            table.set_columns(Some(post_columns(locale)), cx);
            table.set_handlers(controller.post_handlers(), cx);
            table.set_data(posts, cx);
            table
        });

        // Push fresh rows into both tables after every change
        let (users_clone, posts_clone) = (users_table.clone(), posts_table.clone());
        cx.observe(&entities.management, move |_this, management, cx| {
            let (users, posts) = {
                let state = management.read(cx);
                (state.user_records(), state.post_records())
            };
            users_clone.update(cx, |table, cx| table.set_data(users, cx));
            posts_clone.update(cx, |table, cx| table.set_data(posts, cx));
            cx.notify();
        })
        .detach();

        // Observe i18n changes
        let (users_clone, posts_clone) = (users_table.clone(), posts_table.clone());
        cx.observe_in(&entities.i18n, window, move |_this, i18n, window, cx| {
            let locale = i18n.read(cx).locale;
            users_clone.update(cx, |table, cx| {
                table.set_columns(Some(user_columns(locale)), cx);
                table.set_locale(locale, window, cx);
            });
            posts_clone.update(cx, |table, cx| {
                table.set_columns(Some(post_columns(locale)), cx);
                table.set_locale(locale, window, cx);
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            controller,
            users_table,
            posts_table,
        }
    }

    fn render_tab(
        &self,
        tab: ActiveTab,
        active: ActiveTab,
        count: usize,
        locale: Locale,
        cx: &Context<Self>,
    ) -> Button {
        let variant = if tab == active {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Ghost
        };
        Button::new(
            SharedString::from(format!("tab-{}", tab.title_key())),
            format!("{} ({count})", t(locale, tab.title_key())),
        )
        .variant(variant)
        .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
            this.controller.select_tab(tab, cx);
        }))
    }
}

impl Render for ManagementPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let state = self.entities.management.read(cx);
        let active = state.active_tab();
        let (user_count, post_count) = (state.users().len(), state.posts().len());
        let notice = state
            .notice()
            .map(|notice| format!("{}: {}", t(locale, notice.kind.label_key()), notice.subject));

        let table = match active {
            ActiveTab::Users => self.users_table.clone(),
            ActiveTab::Posts => self.posts_table.clone(),
        };

        Stack::column()
            .gap(16.0)
            .child(
                div()
                    .text_xl()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(t(locale, "management-title")),
            )
            .child(
                Stack::row()
                    .child(self.render_tab(ActiveTab::Users, active, user_count, locale, cx))
                    .child(self.render_tab(ActiveTab::Posts, active, post_count, locale, cx)),
            )
            .children(notice.map(|notice| {
                div()
                    .px_3()
                    .py_2()
                    .rounded_md()
                    .bg(AdminColors::table_header_bg())
                    .border_1()
                    .border_color(AdminColors::border())
                    .text_size(px(13.0))
                    .text_color(AdminColors::text_secondary())
                    .child(notice)
            }))
            .child(table)
            .child(ButtonShowcase::new(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ColumnWidth;

    fn width_of(columns: &[ColumnSpec], key: &str) -> Option<ColumnWidth> {
        columns.iter().find(|col| col.key == key).and_then(|col| col.width)
    }

    #[test]
    fn user_columns_mix_width_kinds() {
        let columns = user_columns(Locale::EnUS);
        assert_eq!(width_of(&columns, "id"), Some(ColumnWidth::Fixed(64.0)));
        assert_eq!(width_of(&columns, "email"), Some(ColumnWidth::Percent(22.0)));
        assert!(matches!(
            width_of(&columns, "username"),
            Some(ColumnWidth::Flex { min: Some(_), max: None })
        ));
    }

    #[test]
    fn action_columns_never_sort() {
        for columns in [user_columns(Locale::KoKR), post_columns(Locale::KoKR)] {
            let actions = columns.iter().find(|col| col.key == "actions").unwrap();
            assert!(!actions.is_sortable(true));
            assert!(columns
                .iter()
                .filter(|col| col.key != "actions")
                .all(|col| col.is_sortable(true)));
        }
    }
}
