//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    actions, px, AnyView, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;
use crate::domain::seed::SeedData;
use crate::i18n::t;

actions!(admin_console, [Quit]);

/// Run the admin console
pub fn run_app(config: AppConfig, seed: SeedData) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);

            // Set up action handlers
            cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

            // Quit the app when all windows are closed (macOS behavior)
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            // Initialize global entities
            let entities = AppEntities::init(config.locale, seed, cx);
            cx.set_global(entities.clone());

            let options = config.table.options();
            let size = gpui::size(px(config.window.width), px(config.window.height));
            let bounds = Bounds::centered(None, size, cx);
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(SharedString::from(t(config.locale, "app-title"))),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            };

            let opened = cx.open_window(window_options, |window, cx| {
                let workspace = cx.new(|cx| Workspace::new(entities.clone(), options, window, cx));
                cx.new(|cx| Root::new(AnyView::from(workspace), window, cx))
            });

            match opened {
                Ok(_) => cx.activate(true),
                Err(err) => {
                    tracing::error!(error = %err, "failed to open main window");
                    cx.quit();
                }
            }
        });
}
