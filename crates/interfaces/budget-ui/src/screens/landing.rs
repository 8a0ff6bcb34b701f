use crate::theme::COL_TEXT_DIM;
use crate::utils::{action_button, link, ButtonVariant};
use budget_core::Route;
use egui_taffy::taffy::prelude::length;
use egui_taffy::{taffy, TuiBuilderLogic};

/// Landing and sign-in placeholder. Returns the route the user picked.
pub fn draw<'a>(tui: impl TuiBuilderLogic<'a>, route: Route) -> Option<Route> {
    let mut next = None;

    tui.style(super::page_style()).add(|tui| {
        match route {
            Route::SignIn => {
                tui.label(egui::RichText::new("Sign In").heading());
                tui.colored_label(COL_TEXT_DIM, "Signing in is not available yet.");
            }
            _ => {
                tui.label(egui::RichText::new("Budget").heading());
                tui.colored_label(COL_TEXT_DIM, "Plan your months, one budget at a time.");
            }
        }

        tui.style(taffy::Style {
            flex_direction: taffy::FlexDirection::Row,
            align_items: Some(taffy::AlignItems::Center),
            gap: length(12.0),
            ..Default::default()
        })
        .add(|tui| {
            if tui
                .ui(|ui| action_button(ui, "SIGN UP", ButtonVariant::Primary, true))
                .clicked()
            {
                next = Some(Route::SignUp);
            }
            let back = match route {
                Route::SignIn => ("Back", Route::Landing),
                _ => ("Sign in", Route::SignIn),
            };
            if tui.ui(|ui| link(ui, back.0)).clicked() {
                next = Some(back.1);
            }
        });
    });

    next
}
