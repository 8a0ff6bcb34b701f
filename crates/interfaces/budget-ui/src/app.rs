use std::sync::mpsc::Receiver;
use std::sync::Arc;

use crate::components::header;
use crate::screens::{home, landing, signup};
use budget_app_core::{
    home_vm, sign_up_form_vm, BackendKind, ChannelNavigator, DraftStore, FieldName,
    HomeController, HostedBackend, Route, SignUpController, SubmitProgress,
};
use egui_taffy::taffy::prelude::{length, percent};
use egui_taffy::{taffy, tui, TuiBuilderLogic};

pub struct BudgetUiApp {
    route: Route,
    backend_kind: BackendKind,
    sign_up: SignUpController<dyn HostedBackend, ChannelNavigator>,
    home: HomeController<dyn HostedBackend>,
    routes: Receiver<Route>,
}

impl BudgetUiApp {
    pub fn new(backend_kind: BackendKind, backend: Arc<dyn HostedBackend>) -> Self {
        let (navigator, routes) = ChannelNavigator::channel();
        let sign_up =
            SignUpController::new(DraftStore::default(), backend.clone(), Arc::new(navigator));

        Self {
            route: Route::SignUp,
            backend_kind,
            sign_up,
            home: HomeController::new(backend),
            routes,
        }
    }

    fn navigate(&mut self, route: Route) {
        tracing::debug!("navigating to {route}");
        if route == Route::Home {
            self.home.refresh();
        }
        self.route = route;
    }

    fn is_busy(&self) -> bool {
        match self.route {
            Route::SignUp => self.sign_up.draft().submitting,
            Route::Home => self.home.state().loading,
            Route::Landing | Route::SignIn => false,
        }
    }

    fn draw_route<'a>(&self, tui: impl TuiBuilderLogic<'a>) -> Option<Route> {
        match self.route {
            Route::Landing | Route::SignIn => landing::draw(tui, self.route),
            Route::SignUp => {
                let vm = sign_up_form_vm(&self.sign_up.draft());
                let controller = &self.sign_up;
                let resp = signup::draw(tui, &vm, &mut |field: FieldName, value: String| {
                    controller.on_field_change(field, value)
                });
                if resp.submit_clicked {
                    if let SubmitProgress::Finished(outcome) = controller.on_submit() {
                        tracing::debug!("submission finished synchronously: {outcome:?}");
                    }
                }
                None
            }
            Route::Home => {
                let state = self.home.state();
                let vm = home_vm(&state);
                let mut year = state.year_input;
                let mut month = state.month_input;

                let resp = home::draw(tui, &vm, &mut year, &mut month);
                if resp.inputs_changed {
                    self.home.with_state_mut(|s| {
                        s.year_input = year;
                        s.month_input = month;
                    });
                }
                if resp.open_clicked {
                    self.home.open_selected_period();
                }
                if resp.refresh_clicked {
                    self.home.refresh();
                }
                None
            }
        }
    }
}

impl eframe::App for BudgetUiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut next_route = None;
        while let Ok(route) = self.routes.try_recv() {
            next_route = Some(route);
        }
        if let Some(route) = next_route.take() {
            self.navigate(route);
            ctx.request_repaint();
        }

        ctx.options_mut(|options| {
            options.max_passes = std::num::NonZeroUsize::MIN.saturating_add(2);
        });
        ctx.style_mut(|style| {
            // `Extend` keeps text measurement width-independent across taffy passes.
            style.wrap_mode = Some(egui::TextWrapMode::Extend);
        });

        let is_busy = self.is_busy();
        egui::CentralPanel::default().show(ctx, |ui| {
            tui(ui, ui.id().with("root"))
                .reserve_available_space()
                .style(taffy::Style {
                    flex_direction: taffy::FlexDirection::Column,
                    size: percent(1.),
                    min_size: taffy::Size {
                        width: percent(1.),
                        height: length(0.0),
                    },
                    ..Default::default()
                })
                .show(|tui| {
                    tui.style(taffy::Style {
                        size: taffy::Size {
                            width: percent(1.),
                            height: length(40.0),
                        },
                        flex_shrink: 0.0,
                        ..Default::default()
                    })
                    .add(|tui| header::draw(tui, self.route, self.backend_kind, is_busy));

                    tui.style(taffy::Style {
                        flex_direction: taffy::FlexDirection::Column,
                        align_items: Some(taffy::AlignItems::Center),
                        flex_grow: 1.0,
                        flex_basis: length(0.0),
                        min_size: taffy::Size {
                            width: percent(1.),
                            height: length(0.0),
                        },
                        overflow: taffy::Point {
                            x: taffy::Overflow::Hidden,
                            y: taffy::Overflow::Scroll,
                        },
                        padding: length(24.0),
                        ..Default::default()
                    })
                    .add(|tui| next_route = self.draw_route(tui));
                });
        });

        if let Some(route) = next_route {
            self.navigate(route);
            ctx.request_repaint();
        }

        // Background work reports through shared state; keep polling until it settles.
        if self.is_busy() {
            ctx.request_repaint();
        }
    }
}
