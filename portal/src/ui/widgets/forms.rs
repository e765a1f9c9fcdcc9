//! # Form Components
//!
//! Reusable form elements for the auth dialog and the dashboard.

use crate::ui::theme::Theme;

pub const FIELD_SIZE: [f32; 2] = [260.0, 26.0];

/// Render a labelled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    password: bool,
) -> egui::Response {
    ui.label(label);
    let response = ui.add_sized(
        FIELD_SIZE,
        egui::TextEdit::singleline(value)
            .password(password)
            .hint_text(hint),
    );
    ui.add_space(6.0);
    response
}

/// True when the user pressed Enter inside `response`
pub fn submitted(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

/// Render the primary action button
pub fn render_button(ui: &mut egui::Ui, text: &str, theme: &Theme, enabled: bool) -> egui::Response {
    let button = egui::Button::new(egui::RichText::new(text).strong())
        .fill(theme.accent)
        .min_size(egui::vec2(FIELD_SIZE[0], 32.0));
    ui.add_enabled(enabled, button)
}

/// Render a form heading
pub fn render_form_heading(ui: &mut egui::Ui, text: &str, theme: &Theme) {
    ui.heading(egui::RichText::new(text).strong().color(theme.accent));
    ui.add_space(12.0);
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(egui::RichText::new(error).color(theme.error));
    ui.add_space(6.0);
}

/// Render a confirmation message
pub fn render_notice(ui: &mut egui::Ui, notice: &str, theme: &Theme) {
    ui.label(egui::RichText::new(notice).color(theme.success));
    ui.add_space(6.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(egui::RichText::new(hint).small().color(theme.dim));
}
