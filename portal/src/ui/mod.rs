//! # GUI Rendering
//!
//! [`PortalUi`] is the eframe entry point. Each frame it drains background
//! events into [`App`], then lays out the price bar, the dashboard and the
//! auth dialog on top.

pub mod screens;
pub mod theme;
pub mod widgets;

use std::time::Duration;

use crate::app::App;
use theme::Theme;
use widgets::notifications::NotificationManager;

/// Background results arrive without input events; poll at this rate.
const REPAINT_INTERVAL: Duration = Duration::from_millis(250);

pub struct PortalUi {
    app: App,
    theme: Theme,
    notifications: NotificationManager,
}

impl PortalUi {
    pub fn new(app: App) -> Self {
        Self {
            app,
            theme: Theme::default(),
            notifications: NotificationManager::default(),
        }
    }
}

impl eframe::App for PortalUi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        for notification in self.app.state.write().drain_notifications() {
            self.notifications.push(notification);
        }

        egui::TopBottomPanel::top("price_bar").show(ctx, |ui| {
            widgets::price_bar::render(ui, &mut self.app, &self.theme);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            screens::dashboard::render(ui, &mut self.app, &self.theme);
        });

        screens::auth::render_dialog(ctx, &mut self.app, &self.theme);
        self.notifications.show(ctx, &self.theme);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
