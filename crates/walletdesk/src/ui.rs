//! UI helper components

use eframe::egui;
use walletdesk_core::{FieldKind, FormField};

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 212, 170);
pub const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(220, 80, 80);
pub const SUCCESS_GREEN: egui::Color32 = egui::Color32::from_rgb(80, 200, 120);

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(text).strong().size(14.0));
    ui.separator();
}

/// Copy to clipboard (platform-specific)
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                tracing::warn!(error = %err, "clipboard write failed");
            }
        }
        Err(err) => tracing::warn!(error = %err, "clipboard unavailable"),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn copy_to_clipboard(_text: &str) {}

/// Monospace value with a copy button
pub fn copyable_text(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).monospace().small());
        if ui
            .small_button("📋")
            .on_hover_text("Copy to clipboard")
            .clicked()
        {
            copy_to_clipboard(text);
        }
    });
}

/// Loading spinner
pub fn loading_spinner(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(text);
    });
}

pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("❌").size(16.0));
        ui.label(egui::RichText::new(message).color(ERROR_RED));
    });
}

pub fn success_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("✅").size(16.0));
        ui.label(egui::RichText::new(message).color(SUCCESS_GREEN));
    });
}

/// Labelled text input bound to a [`FormField`].
///
/// Pushes edits, focus and submit key presses back into the field and shows
/// its error underneath. Enter submits single-line fields, Ctrl+Enter
/// submits multi-line ones.
pub fn form_field(ui: &mut egui::Ui, field: &mut FormField, hint: &str) -> egui::Response {
    ui.label(egui::RichText::new(field.label()).strong());

    let kind = field.field_kind();
    let focus_request = field.take_focus_request();
    let multiline_submit = kind == FieldKind::MultiLine
        && field.is_focused()
        && ui.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Enter));

    let response = {
        let edit = match kind {
            FieldKind::SingleLine => egui::TextEdit::singleline(field.buffer_mut()),
            FieldKind::Password => egui::TextEdit::singleline(field.buffer_mut()).password(true),
            FieldKind::MultiLine => egui::TextEdit::multiline(field.buffer_mut()).desired_rows(3),
        };
        ui.add(
            edit.hint_text(hint)
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace)
                // Tab is routed through the controllers
                .lock_focus(true),
        )
    };

    if focus_request {
        response.request_focus();
    }
    if response.changed() {
        field.mark_edited();
    }
    field.set_focused(response.has_focus() || focus_request);

    let single_line_submit = kind != FieldKind::MultiLine
        && response.lost_focus()
        && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if single_line_submit || multiline_submit {
        field.press_submit();
    }

    if let Some(error) = field.error() {
        ui.label(egui::RichText::new(error).color(ERROR_RED).small());
    }
    response
}

// =============================================================================
// STYLED BUTTONS
// =============================================================================

/// Primary button with enabled state
pub fn primary_button_enabled(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let accent = egui::Color32::from_rgb(0, 180, 150);
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(130.0, 34.0))
        .fill(accent);
    ui.add_enabled(enabled, btn)
}

/// Secondary action button - subdued, outline style
pub fn secondary_button_enabled(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0))
        .min_size(egui::vec2(90.0, 34.0));
    ui.add_enabled(enabled, btn)
}

/// Renders a core [`walletdesk_core::Button`] and records the click.
pub fn primary(ui: &mut egui::Ui, button: &mut walletdesk_core::Button) {
    if primary_button_enabled(ui, button.label(), button.is_enabled()).clicked() {
        button.click();
    }
}

pub fn secondary(ui: &mut egui::Ui, button: &mut walletdesk_core::Button) {
    if secondary_button_enabled(ui, button.label(), button.is_enabled()).clicked() {
        button.click();
    }
}

/// Render content in a subtle card/frame
pub fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, add_contents);
}
