use crate::components::forms::form_input;
use crate::theme::{COL_ERROR, COL_TEXT_DIM};
use crate::utils::{action_button, ButtonVariant};
use budget_app_core::{FieldName, SignUpFormVm};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

#[derive(Debug, Default)]
pub struct SignUpResponse {
    pub submit_clicked: bool,
}

/// Page shell around the sign-up form.
pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    vm: &SignUpFormVm,
    on_change: &mut dyn FnMut(FieldName, String),
) -> SignUpResponse {
    let mut resp = SignUpResponse::default();

    tui.style(super::page_style()).add(|tui| {
        tui.label(egui::RichText::new(vm.title).heading());
        tui.colored_label(COL_TEXT_DIM, vm.description);

        for field in &vm.fields {
            form_input(&mut *tui, field, !vm.is_submitting, &mut *on_change);
        }

        if let Some(line) = &vm.error_line {
            tui.colored_label(COL_ERROR, line.as_str());
        }

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(8.0),
            margin: taffy::Rect {
                left: length(0.0),
                right: length(0.0),
                top: length(8.0),
                bottom: length(0.0),
            },
            size: taffy::Size {
                width: percent(1.),
                height: taffy::Dimension::Auto,
            },
            ..Default::default()
        })
        .add(|tui| {
            resp.submit_clicked = tui
                .ui(|ui| action_button(ui, "SIGN UP", ButtonVariant::Primary, vm.can_submit))
                .clicked();
            if vm.is_submitting {
                tui.ui_add(egui::Spinner::new());
            }
        });
    });

    resp
}
