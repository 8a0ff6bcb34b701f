use crate::theme::*;
use budget_app_core::{BackendKind, Route};
use egui_taffy::bg::simple::{TuiBackground, TuiBuilderLogicWithBackground};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, TuiBuilderLogic};

pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, route: Route, backend: BackendKind, is_busy: bool) {
    tui.style(taffy::Style {
        flex_direction: taffy::FlexDirection::Row,
        justify_content: Some(taffy::JustifyContent::SpaceBetween),
        align_items: Some(taffy::AlignItems::Center),
        padding: length(8.0),
        size: taffy::Size {
            width: percent(1.),
            height: percent(1.),
        },
        ..Default::default()
    })
    .bg_add(
        TuiBackground::new()
            .with_background_color(COL_SURFACE)
            .with_border_color(COL_BORDER)
            .with_border_width(1.0),
        |tui| {
            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(8.0),
                ..Default::default()
            })
            .add(|tui| {
                tui.label(
                    egui::RichText::new("Budget")
                        .size(16.0)
                        .strong()
                        .color(COL_ACCENT),
                );
                tui.label(
                    egui::RichText::new(route.path())
                        .monospace()
                        .color(COL_TEXT_DIM),
                );
            });

            tui.style(taffy::Style {
                flex_direction: taffy::FlexDirection::Row,
                align_items: Some(taffy::AlignItems::Center),
                gap: length(6.0),
                ..Default::default()
            })
            .add(|tui| {
                if backend == BackendKind::Memory {
                    tui.label(egui::RichText::new("OFFLINE").size(11.0).color(COL_WARN));
                }
                if is_busy {
                    tui.ui_add(egui::Spinner::new());
                }
            });
        },
    );
}
