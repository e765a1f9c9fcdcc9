//! # GUI Theme
//!
//! A handful of accent colours on top of egui's default visuals.

use egui::Color32;

use crate::app::NotificationLevel;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Headings and primary buttons
    pub accent: Color32,
    pub error: Color32,
    pub success: Color32,
    /// Secondary text
    pub dim: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color32::from_rgb(204, 0, 0),
            error: Color32::from_rgb(230, 60, 60),
            success: Color32::from_rgb(40, 170, 90),
            dim: Color32::from_rgb(150, 150, 150),
        }
    }
}

impl Theme {
    pub fn notification_color(&self, level: NotificationLevel) -> Color32 {
        match level {
            NotificationLevel::Info => self.dim,
            NotificationLevel::Success => self.success,
            NotificationLevel::Error => self.error,
        }
    }
}
