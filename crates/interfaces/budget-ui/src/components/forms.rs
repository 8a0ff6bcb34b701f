use crate::utils::field_label;
use budget_app_core::{FieldName, FieldVm, InputKind};
use egui_taffy::taffy::prelude::{auto, length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

fn field_column() -> taffy::Style {
    taffy::Style {
        flex_direction: taffy::FlexDirection::Column,
        gap: length(4.0),
        size: taffy::Size {
            width: percent(1.),
            height: auto(),
        },
        ..Default::default()
    }
}

/// One labeled sign-up input. Edits are reported through `on_change`; the
/// widget never writes form state itself.
pub fn form_input<'a>(
    tui: impl TuiBuilderLogic<'a>,
    field: &FieldVm,
    enabled: bool,
    on_change: &mut dyn FnMut(FieldName, String),
) {
    let mut value = field.value.clone();
    let mut changed = false;

    tui.style(field_column()).add(|tui| {
        tui.ui(|ui| field_label(ui, field.spec.label));
        let resp = tui.ui(|ui| {
            ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut value)
                    .id_salt(field.spec.name.as_str())
                    .hint_text(field.spec.placeholder)
                    .password(field.spec.kind == InputKind::Password)
                    .desired_width(f32::INFINITY),
            )
        });
        changed = resp.changed();
    });

    if changed {
        on_change(field.spec.name, value);
    }
}

/// Plain labeled text input bound to `value`. Returns whether it was edited.
pub fn text_field<'a>(
    tui: impl TuiBuilderLogic<'a>,
    label: &str,
    value: &mut String,
    hint: &str,
) -> bool {
    let mut changed = false;
    tui.style(field_column()).add(|tui| {
        tui.ui(|ui| field_label(ui, label));
        changed = tui
            .ui(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut *value)
                        .id_salt(label)
                        .hint_text(hint)
                        .desired_width(f32::INFINITY),
                )
            })
            .changed();
    });
    changed
}
