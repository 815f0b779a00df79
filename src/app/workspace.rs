//! Workspace - Main Shell with Layout
//!
//! The workspace is the main container that holds the header and the
//! management page.

use gpui::{prelude::*, Context, Entity, IntoElement, Render, Window};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::shell::Shell;
use crate::features::management::page::ManagementPage;
use crate::table::TableOptions;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    management_page: Entity<ManagementPage>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        options: TableOptions,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let management_page =
            cx.new(|cx| ManagementPage::new(entities.clone(), options, window, cx));

        Self {
            header,
            management_page,
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        Shell::new()
            .header(self.header.clone())
            .child(self.management_page.clone())
    }
}
