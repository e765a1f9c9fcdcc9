//! # Authentication Dialog
//!
//! One window whose content follows [`crate::auth::AuthState::form_mode`]. Field edits are
//! made on a copy of the form and written back once per frame; button
//! presses are collected and dispatched after rendering.

use crate::app::App;
use crate::auth::{AuthForm, FormMode};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthAction {
    Submit,
    SwitchEntryMode,
    ForgotPassword,
    BackToSignIn,
    ResendOtp,
    Close,
}

/// Render the auth dialog if it is open
pub fn render_dialog(ctx: &egui::Context, app: &mut App, theme: &Theme) {
    let (mode, submitting, original) = {
        let state = app.state.read();
        if !state.dialog_open {
            return;
        }
        (state.auth.form_mode(), state.auth.is_submitting(), state.form.clone())
    };
    let Some(mode) = mode else {
        return;
    };

    let mut form = original.clone();
    let mut actions = Vec::new();
    let mut open = true;

    egui::Window::new("CRED")
        .id(egui::Id::new("auth_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            forms::render_form_heading(ui, mode.title(), theme);

            ui.add_enabled_ui(!submitting, |ui| {
                if render_fields(ui, mode, &mut form, theme) {
                    actions.push(AuthAction::Submit);
                }
            });

            if let Some(error) = &form.error {
                forms::render_error(ui, error, theme);
            }
            if let Some(notice) = &form.notice {
                forms::render_notice(ui, notice, theme);
            }

            let label = if submitting { "Processing..." } else { mode.submit_label() };
            if forms::render_button(ui, label, theme, !submitting).clicked() {
                actions.push(AuthAction::Submit);
            }
            ui.add_space(8.0);

            ui.add_enabled_ui(!submitting, |ui| render_links(ui, mode, &mut actions));
        });

    if !open {
        actions.push(AuthAction::Close);
    }

    if form != original {
        copy_inputs(&mut app.state.write().form, &form);
    }

    for action in actions {
        match action {
            AuthAction::Submit => {
                app.handle_submit_click();
            }
            AuthAction::SwitchEntryMode => app.handle_switch_entry_mode(),
            AuthAction::ForgotPassword => app.handle_forgot_password_click(),
            AuthAction::BackToSignIn => app.handle_back_to_sign_in(),
            AuthAction::ResendOtp => {
                app.handle_resend_otp_click();
            }
            AuthAction::Close => app.handle_close_auth_dialog(),
        }
    }
}

/// Input fields for `mode`. Returns true if Enter was pressed in the last one.
fn render_fields(ui: &mut egui::Ui, mode: FormMode, form: &mut AuthForm, theme: &Theme) -> bool {
    match mode {
        FormMode::SignIn => {
            forms::render_text_input(ui, "Email", &mut form.email, "you@example.com", false);
            let password = forms::render_text_input(ui, "Password", &mut form.password, "", true);
            forms::submitted(ui, &password)
        }
        FormMode::SignUp => {
            forms::render_text_input(ui, "Full Name", &mut form.name, "", false);
            forms::render_text_input(ui, "Email", &mut form.email, "you@example.com", false);
            forms::render_text_input(ui, "Phone (optional)", &mut form.phone, "", false);
            forms::render_text_input(ui, "Password", &mut form.password, "", true);
            let confirm =
                forms::render_text_input(ui, "Confirm Password", &mut form.confirm_password, "", true);
            forms::submitted(ui, &confirm)
        }
        FormMode::Otp => {
            forms::render_hint(ui, &format!("Enter the code sent to {}", form.email.trim()), theme);
            let mut otp = form.otp.clone();
            let response = forms::render_text_input(ui, "OTP", &mut otp, "6-digit code", false);
            form.set_otp(&otp);
            forms::submitted(ui, &response)
        }
        FormMode::Forgot => {
            let email = forms::render_text_input(ui, "Email", &mut form.email, "you@example.com", false);
            forms::submitted(ui, &email)
        }
        FormMode::Reset => {
            let mut otp = form.otp.clone();
            forms::render_text_input(ui, "Reset Code", &mut otp, "6-digit code", false);
            form.set_otp(&otp);
            forms::render_text_input(ui, "New Password", &mut form.new_password, "", true);
            let confirm =
                forms::render_text_input(ui, "Confirm Password", &mut form.confirm_password, "", true);
            forms::submitted(ui, &confirm)
        }
    }
}

fn render_links(ui: &mut egui::Ui, mode: FormMode, actions: &mut Vec<AuthAction>) {
    match mode {
        FormMode::SignIn => {
            if ui.link("Forgot password?").clicked() {
                actions.push(AuthAction::ForgotPassword);
            }
            if ui.link("New to CRED? Join now").clicked() {
                actions.push(AuthAction::SwitchEntryMode);
            }
        }
        FormMode::SignUp => {
            if ui.link("Already a member? Sign in").clicked() {
                actions.push(AuthAction::SwitchEntryMode);
            }
        }
        FormMode::Otp => {
            if ui.link("Resend code").clicked() {
                actions.push(AuthAction::ResendOtp);
            }
            if ui.link("Back to sign in").clicked() {
                actions.push(AuthAction::BackToSignIn);
            }
        }
        FormMode::Forgot | FormMode::Reset => {
            if ui.link("Back to sign in").clicked() {
                actions.push(AuthAction::BackToSignIn);
            }
        }
    }
}

/// Copy user-editable fields; error and notice belong to the handlers.
fn copy_inputs(target: &mut AuthForm, edited: &AuthForm) {
    target.email.clone_from(&edited.email);
    target.password.clone_from(&edited.password);
    target.name.clone_from(&edited.name);
    target.phone.clone_from(&edited.phone);
    target.confirm_password.clone_from(&edited.confirm_password);
    target.otp.clone_from(&edited.otp);
    target.new_password.clone_from(&edited.new_password);
}
