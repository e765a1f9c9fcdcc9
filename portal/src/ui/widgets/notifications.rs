//! # Notifications Widget
//!
//! Short-lived messages in the bottom-right corner.

use std::time::{Duration, Instant};

use crate::app::Notification;
use crate::ui::theme::Theme;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Queue of visible toasts
#[derive(Default)]
pub struct NotificationManager {
    toasts: Vec<(Notification, Instant)>,
}

impl NotificationManager {
    pub fn push(&mut self, notification: Notification) {
        self.toasts.push((notification, Instant::now()));
    }

    /// Render live toasts and forget expired ones
    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        self.toasts.retain(|(_, shown)| shown.elapsed() < TOAST_LIFETIME);
        if self.toasts.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("portal_notifications"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
            .show(ctx, |ui| {
                for (notification, _) in &self.toasts {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&notification.message)
                                .color(theme.notification_color(notification.level)),
                        );
                    });
                }
            });
        ctx.request_repaint_after(Duration::from_millis(500));
    }
}
