//! # Dashboard
//!
//! Account summary for the signed-in user and the investment calculator.

use shared::{format_crypto_amount, format_usd, CryptoAsset};

use crate::app::App;
use crate::auth::EntryMode;
use crate::ui::theme::Theme;

pub fn render(ui: &mut egui::Ui, app: &mut App, theme: &Theme) {
    let (user, prices, mut calculator) = {
        let state = app.state.read();
        (state.current_user().cloned(), state.prices, state.calculator.clone())
    };

    match &user {
        Some(user) => {
            ui.heading(format!("Welcome back, {}", user.name));
            ui.add_space(8.0);
            egui::Grid::new("account_summary")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Email");
                    ui.label(user.email.as_str());
                    ui.end_row();
                    ui.label("Role");
                    ui.label(user.role());
                    ui.end_row();
                    ui.label("Total investment");
                    ui.label(format_usd(user.total_investment));
                    ui.end_row();
                    ui.label("Total returns");
                    ui.label(format_usd(user.total_returns));
                    ui.end_row();
                    ui.label("Active investments");
                    ui.label(user.active_investments.to_string());
                    ui.end_row();
                });
        }
        None => {
            ui.heading("CRED");
            ui.label(egui::RichText::new("Sign in to view your account.").color(theme.dim));
            ui.horizontal(|ui| {
                if ui.button("Sign In").clicked() {
                    app.handle_open_auth_dialog(EntryMode::SignIn);
                }
                if ui.button("Join CRED").clicked() {
                    app.handle_open_auth_dialog(EntryMode::SignUp);
                }
            });
        }
    }

    ui.add_space(16.0);
    ui.separator();
    ui.label(egui::RichText::new("Investment calculator").strong());

    let before = calculator.clone();
    ui.horizontal(|ui| {
        ui.label("Amount (USD)");
        ui.add(egui::TextEdit::singleline(&mut calculator.amount).desired_width(120.0));

        egui::ComboBox::from_id_salt("calculator_asset")
            .selected_text(calculator.asset.symbol())
            .show_ui(ui, |ui| {
                for asset in CryptoAsset::all() {
                    ui.selectable_value(&mut calculator.asset, *asset, asset.symbol());
                }
            });
    });

    match calculator.amount_usd() {
        Some(usd) => {
            let amount = format_crypto_amount(usd, calculator.asset, &prices);
            ui.label(format!(
                "{} {} at {}",
                amount,
                calculator.asset.symbol(),
                format_usd(prices.price_of(calculator.asset))
            ));
        }
        None => {
            ui.label(egui::RichText::new("Enter a valid amount").color(theme.dim));
        }
    }

    if calculator != before {
        app.state.write().calculator = calculator;
    }
}
