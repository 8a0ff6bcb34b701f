use crate::components::forms::text_field;
use crate::theme::{COL_ERROR, COL_TEXT_DIM};
use crate::utils::{action_button, ButtonVariant};
use budget_app_core::HomeVm;
use egui_taffy::taffy::prelude::length;
use egui_taffy::{taffy, TuiBuilderLogic};

#[derive(Debug, Default)]
pub struct HomeResponse {
    pub inputs_changed: bool,
    pub open_clicked: bool,
    pub refresh_clicked: bool,
}

pub fn draw<'a>(
    tui: impl TuiBuilderLogic<'a>,
    vm: &HomeVm,
    year: &mut String,
    month: &mut String,
) -> HomeResponse {
    let mut resp = HomeResponse::default();

    tui.style(super::page_style()).add(|tui| {
        tui.label(egui::RichText::new(vm.greeting.as_str()).heading());
        match &vm.period_label {
            Some(label) => tui.colored_label(COL_TEXT_DIM, format!("Current budget: {label}")),
            None => tui.colored_label(COL_TEXT_DIM, "No budget selected yet."),
        };

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            gap: length(8.0),
            ..Default::default()
        })
        .add(|tui| {
            resp.inputs_changed |= text_field(&mut *tui, "Year", &mut *year, "2024");
            resp.inputs_changed |= text_field(&mut *tui, "Month", &mut *month, "01");
        });

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(8.0),
            ..Default::default()
        })
        .add(|tui| {
            resp.open_clicked = tui
                .ui(|ui| action_button(ui, "OPEN BUDGET", ButtonVariant::Primary, !vm.is_busy))
                .clicked();
            resp.refresh_clicked = tui
                .ui(|ui| action_button(ui, "REFRESH", ButtonVariant::Outline, !vm.is_busy))
                .clicked();
        });

        if let Some(err) = &vm.error {
            tui.colored_label(COL_ERROR, format!("Error: {err}"));
        }

        if let Some(budget) = &vm.budget_pretty {
            tui.label(egui::RichText::new(budget.as_str()).monospace());
        }
    });

    resp
}
