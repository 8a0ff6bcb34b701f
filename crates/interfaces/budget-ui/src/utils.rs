use crate::theme::*;
use egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
}

pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(12.0)
            .color(COL_TEXT_DIM)
            .strong(),
    );
}

pub fn action_button(
    ui: &mut egui::Ui,
    label: &str,
    variant: ButtonVariant,
    enabled: bool,
) -> egui::Response {
    let (fill, text_col) = match variant {
        ButtonVariant::Primary => (COL_ACCENT, COL_SURFACE),
        ButtonVariant::Outline => (Color32::TRANSPARENT, COL_ACCENT),
    };

    let text = egui::RichText::new(label)
        .strong()
        .color(if enabled { text_col } else { COL_TEXT_DIM });

    let btn = egui::Button::new(text)
        .min_size(egui::vec2(120.0, 30.0))
        .fill(if enabled { fill } else { Color32::TRANSPARENT })
        .stroke(egui::Stroke::new(
            1.0,
            if enabled { COL_ACCENT } else { COL_BORDER },
        ));

    ui.add_enabled(enabled, btn)
}

/// Small inline link-styled button.
pub fn link(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(egui::Link::new(
        egui::RichText::new(label).color(COL_ACCENT),
    ))
}
