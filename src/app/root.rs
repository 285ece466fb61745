use {
    eframe::{
        Frame, Storage,
        egui::{
            Align, CentralPanel, Context, Layout, RichText, ScrollArea, TopBottomPanel, Visuals,
        },
    },
    serde::{Deserialize, Serialize},
    std::sync::Arc,
};

use crate::{
    Cli,
    app::{DashboardController, HealthStatus, Selection},
    config::TICKER,
    data::{DemoProvider, HttpProvider, PredictionProvider},
    ui::{
        CompaniesPanel, ControlsPanel, Panel, PredictionPanel, ReasoningPanel, SectorsPanel,
        SelectionChanged, TickerState, UI_CONFIG, UI_TEXT, UiStyleExt, render_trend_chart,
    },
    utils::format_relative,
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    pub(crate) selection: Selection, // persists across sessions
    #[serde(skip)]
    pub(crate) controller: DashboardController,
    #[serde(skip)]
    ticker_state: TickerState,
    #[serde(skip)]
    demo_mode: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            controller: DashboardController::new(Arc::new(DemoProvider)),
            ticker_state: TickerState::default(),
            demo_mode: true,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.configure_provider(&args);
        app.controller.check_health(&cc.egui_ctx);
        app
    }

    /// Picks the provider and sets `demo_mode` to match. Skipped fields come
    /// back from persistence as field-type defaults, so both are assigned
    /// unconditionally here rather than trusting the restored value.
    fn configure_provider(&mut self, args: &Cli) {
        let (provider, demo_mode): (Arc<dyn PredictionProvider>, bool) = match &args.backend_url {
            Some(url) => match HttpProvider::new(url) {
                Ok(provider) => (Arc::new(provider), false),
                Err(err) => {
                    log::error!(
                        "Failed to build HTTP client for {url}: {err}; falling back to demo mode"
                    );
                    (Arc::new(DemoProvider), true)
                }
            },
            None => (Arc::new(DemoProvider), true),
        };

        self.demo_mode = demo_mode;
        self.controller = DashboardController::new(provider);
    }

    fn handle_run_clicked(&mut self, ctx: &Context) {
        self.controller
            .request_prediction(self.selection.to_request(), ctx);
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("header")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.heading(
                            RichText::new(&UI_TEXT.app_title)
                                .strong()
                                .color(UI_CONFIG.colors.heading),
                        );
                        ui.label_subdued(&UI_TEXT.app_subtitle);
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let loading = self.controller.state().is_loading();
                        let label = if loading {
                            &UI_TEXT.button_running
                        } else {
                            &UI_TEXT.button_run
                        };
                        let clicked = ui
                            .add_enabled(!loading, eframe::egui::Button::new(label))
                            .clicked();
                        if clicked {
                            self.handle_run_clicked(ctx);
                        }

                        ui.badge(
                            format!(
                                "{}: {}",
                                UI_TEXT.label_updated,
                                updated_label(self.controller.last_updated())
                            ),
                            UI_CONFIG.colors.badge_outline,
                        );

                        match self.controller.health() {
                            HealthStatus::Healthy if self.demo_mode => {
                                ui.badge(&UI_TEXT.badge_demo_mode, UI_CONFIG.colors.healthy)
                            }
                            HealthStatus::Healthy => {
                                ui.badge(&UI_TEXT.badge_backend_online, UI_CONFIG.colors.healthy)
                            }
                            HealthStatus::Unhealthy => {
                                ui.badge(&UI_TEXT.badge_backend_offline, UI_CONFIG.colors.unhealthy)
                            }
                            HealthStatus::Unknown => {}
                        }
                    });
                });
            });
    }

    fn render_ticker_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("ticker")
            .exact_height(TICKER.height)
            .frame(eframe::egui::Frame::NONE)
            .show(ctx, |ui| {
                self.ticker_state.render(ui);
            });
    }

    fn render_error_alert(&mut self, ui: &mut eframe::egui::Ui) {
        let Some(message) = self.controller.error_message().map(str::to_string) else {
            return;
        };

        UI_CONFIG.alert_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.alert_title)
                            .strong()
                            .color(UI_CONFIG.colors.bearish),
                    );
                    ui.label(RichText::new(message).color(UI_CONFIG.colors.bearish));
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(&UI_TEXT.alert_dismiss).clicked() {
                        self.controller.dismiss_error();
                    }
                });
            });
        });
        ui.add_space(8.0);
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                self.render_error_alert(ui);

                let loading = self.controller.state().is_loading();
                UI_CONFIG.card_frame().show(ui, |ui| {
                    let mut panel = ControlsPanel::new(self.selection, !loading);
                    for event in panel.render(ui) {
                        match event {
                            SelectionChanged::Risk(risk) => self.selection.risk_level = risk,
                            SelectionChanged::Horizon(horizon) => self.selection.horizon = horizon,
                        }
                    }
                });
                ui.add_space(8.0);

                let prediction = self.controller.visible_prediction().cloned();
                ui.columns(2, |columns| {
                    UI_CONFIG.card_frame().show(&mut columns[0], |ui| {
                        PredictionPanel::new(self.controller.state(), prediction.as_ref())
                            .render(ui);
                    });
                    UI_CONFIG.card_frame().show(&mut columns[1], |ui| {
                        render_trend_chart(ui, prediction.as_ref());
                    });
                });
                ui.add_space(8.0);

                if let Some(prediction) = &prediction {
                    ui.columns(2, |columns| {
                        UI_CONFIG.card_frame().show(&mut columns[0], |ui| {
                            SectorsPanel::new(&prediction.sectors).render(ui);
                        });
                        UI_CONFIG.card_frame().show(&mut columns[1], |ui| {
                            CompaniesPanel::new(prediction.display_companies()).render(ui);
                        });
                    });
                    ui.add_space(8.0);

                    UI_CONFIG.card_frame().show(ui, |ui| {
                        ReasoningPanel::new(&prediction.reasoning).render(ui);
                    });
                }
            });
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.controller.poll();

        self.render_ticker_panel(ctx);
        self.render_top_panel(ctx);
        self.render_central_panel(ctx);

        if self.controller.state().is_loading() {
            // Keep polling the result channel while a request is in flight.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

/// "Never" until the first result lands, relative age afterwards.
fn updated_label(last_updated: Option<chrono::DateTime<chrono::Utc>>) -> String {
    match last_updated {
        Some(updated) => format_relative(updated, chrono::Utc::now()),
        None => UI_TEXT.label_never.clone(),
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restored_session_stays_in_demo_mode() {
        // Skipped fields deserialize to their field-type defaults, so a
        // persisted round-trip alone leaves demo_mode false.
        let persisted = serde_json::to_string(&App::default()).unwrap();
        let mut app: App = serde_json::from_str(&persisted).unwrap();
        assert!(!app.demo_mode);

        app.configure_provider(&Cli { backend_url: None });
        assert!(app.demo_mode);
    }

    #[test]
    fn backend_url_switches_out_of_demo_mode() {
        let mut app = App::default();
        app.configure_provider(&Cli {
            backend_url: Some("http://localhost:8000".to_string()),
        });
        assert!(!app.demo_mode);
    }

    #[test]
    fn updated_badge_shows_never_before_first_result() {
        assert_eq!(updated_label(None), "Never");
        assert_eq!(updated_label(Some(chrono::Utc::now())), "Just now");
    }
}
