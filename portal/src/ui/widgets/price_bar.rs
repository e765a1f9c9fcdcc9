//! # Top Bar
//!
//! Live prices on the left, account actions on the right.

use shared::{format_usd, CryptoAsset};

use crate::app::App;
use crate::auth::EntryMode;
use crate::ui::theme::Theme;

pub fn render(ui: &mut egui::Ui, app: &mut App, theme: &Theme) {
    let (prices, updated_at, user_name) = {
        let state = app.state.read();
        (
            state.prices,
            state.prices_updated_at,
            state.current_user().map(|u| u.name.clone()),
        )
    };

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("CRED").strong().color(theme.accent));
        ui.separator();

        for asset in CryptoAsset::all() {
            ui.label(format!("{} {}", asset.symbol(), format_usd(prices.price_of(*asset))));
        }

        let freshness = match updated_at {
            Some(at) => format!("updated {}", at.with_timezone(&chrono::Local).format("%H:%M:%S")),
            None => "indicative prices".to_string(),
        };
        ui.label(egui::RichText::new(freshness).small().color(theme.dim));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| match user_name {
            Some(name) => {
                if ui.button("Logout").clicked() {
                    app.handle_logout_click();
                }
                ui.label(name);
            }
            None => {
                if ui.button("Join CRED").clicked() {
                    app.handle_open_auth_dialog(EntryMode::SignUp);
                }
                if ui.button("Sign In").clicked() {
                    app.handle_open_auth_dialog(EntryMode::SignIn);
                }
            }
        });
    });
}
