use eframe::egui::{Color32, ProgressBar, RichText, Ui};
use strum::IntoEnumIterator;

use crate::app::{FetchState, Selection};
use crate::config::{Horizon, RiskLevel};
use crate::models::Prediction;
use crate::ui::styles::{DirectionColor, UiStyleExt, panel_heading};
use crate::ui::{UI_CONFIG, UI_TEXT};

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, Copy)]
pub enum SelectionChanged {
    Risk(RiskLevel),
    Horizon(Horizon),
}

/// Risk and horizon selectors. Disabled while a request is in flight.
pub struct ControlsPanel {
    selection: Selection,
    enabled: bool,
}

impl ControlsPanel {
    pub fn new(selection: Selection, enabled: bool) -> Self {
        Self { selection, enabled }
    }
}

impl Panel for ControlsPanel {
    type Event = SelectionChanged;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.label(panel_heading(&UI_TEXT.controls_heading));
        ui.add_space(4.0);

        ui.add_enabled_ui(self.enabled, |ui| {
            ui.label_subdued(&UI_TEXT.label_risk);
            ui.horizontal(|ui| {
                for risk in RiskLevel::iter() {
                    let selected = self.selection.risk_level == risk;
                    if ui.selectable_label(selected, risk.to_string()).clicked() && !selected {
                        self.selection.risk_level = risk;
                        events.push(SelectionChanged::Risk(risk));
                    }
                }
            });

            ui.add_space(6.0);
            ui.label_subdued(&UI_TEXT.label_horizon);
            ui.horizontal(|ui| {
                for horizon in Horizon::iter() {
                    let selected = self.selection.horizon == horizon;
                    let label = format!("{} ({})", horizon, horizon.time_range());
                    if ui.selectable_label(selected, label).clicked() && !selected {
                        self.selection.horizon = horizon;
                        events.push(SelectionChanged::Horizon(horizon));
                    }
                }
            });
        });

        events
    }
}

/// Core prediction card: direction, confidence, probability split.
/// Pure function of the fetch state and the currently visible prediction.
pub struct PredictionPanel<'a> {
    state: &'a FetchState,
    prediction: Option<&'a Prediction>,
}

impl<'a> PredictionPanel<'a> {
    pub fn new(state: &'a FetchState, prediction: Option<&'a Prediction>) -> Self {
        Self { state, prediction }
    }

    fn render_result(&self, ui: &mut Ui, prediction: &Prediction) {
        let color = prediction.direction.color();
        let arrow = if prediction.direction.is_up() {
            "▲"
        } else {
            "▼"
        };

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{arrow} {}", prediction.direction))
                    .size(28.0)
                    .strong()
                    .color(color),
            );
            ui.add_space(10.0);
            ui.vertical(|ui| {
                ui.label_subdued(format!("{}:", UI_TEXT.label_confidence));
                ui.label(
                    RichText::new(prediction.confidence().to_string())
                        .size(18.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
            });
        });

        ui.add_space(8.0);
        ui.metric(
            &UI_TEXT.label_prob_up,
            &format!("{:.0}%", prediction.probability_up * 100.0),
            UI_CONFIG.colors.bullish,
        );
        ui.add(
            ProgressBar::new(prediction.probability_up as f32)
                .fill(UI_CONFIG.colors.bullish)
                .desired_height(6.0),
        );
        ui.add_space(4.0);
        ui.metric(
            &UI_TEXT.label_prob_down,
            &format!("{:.0}%", prediction.probability_down * 100.0),
            UI_CONFIG.colors.bearish,
        );
        ui.add(
            ProgressBar::new(prediction.probability_down as f32)
                .fill(UI_CONFIG.colors.bearish)
                .desired_height(6.0),
        );

        if let Some(sector) = prediction.sectors.first() {
            ui.add_space(8.0);
            ui.metric(&UI_TEXT.label_top_sector, sector, UI_CONFIG.colors.heading);
        }
    }
}

impl Panel for PredictionPanel<'_> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        ui.horizontal(|ui| {
            ui.label(panel_heading(&UI_TEXT.prediction_heading));
            let (badge, color) = match self.state {
                FetchState::Loading => (&UI_TEXT.badge_loading, UI_CONFIG.colors.warning),
                FetchState::Success(_) => (&UI_TEXT.badge_live, UI_CONFIG.colors.healthy),
                _ => (&UI_TEXT.badge_ready, UI_CONFIG.colors.badge_outline),
            };
            ui.badge(badge, color);
        });
        ui.add_space(6.0);

        match self.state {
            FetchState::Loading => {
                // Keep stale results visible underneath the loading header.
                if let Some(prediction) = self.prediction {
                    self.render_result(ui, prediction);
                } else {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label_subdued(&UI_TEXT.loading_body);
                    });
                }
            }
            FetchState::Error(message) if self.prediction.is_none() => {
                ui.label(
                    RichText::new(&UI_TEXT.error_heading)
                        .strong()
                        .color(UI_CONFIG.colors.bearish),
                );
                ui.label(RichText::new(message).color(UI_CONFIG.colors.bearish));
            }
            _ => match self.prediction {
                Some(prediction) => self.render_result(ui, prediction),
                None => {
                    ui.label_subdued(&UI_TEXT.idle_body);
                }
            },
        }

        Vec::new()
    }
}

/// Ranked sector list.
pub struct SectorsPanel<'a> {
    sectors: &'a [String],
}

impl<'a> SectorsPanel<'a> {
    pub fn new(sectors: &'a [String]) -> Self {
        Self { sectors }
    }
}

impl Panel for SectorsPanel<'_> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        ui.label(panel_heading(&UI_TEXT.sectors_heading));
        ui.add_space(4.0);

        if self.sectors.is_empty() {
            ui.label_subdued(&UI_TEXT.sectors_empty);
            return Vec::new();
        }

        for (index, sector) in self.sectors.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.badge(format!("#{}", index + 1), UI_CONFIG.colors.healthy);
                ui.label(RichText::new(sector).color(UI_CONFIG.colors.heading));
                ui.label_subdued(&UI_TEXT.label_recommended);
            });
        }
        Vec::new()
    }
}

/// Ranked company list, already truncated for display by the caller.
/// Rank = position + 1.
pub struct CompaniesPanel<'a> {
    companies: &'a [String],
}

impl<'a> CompaniesPanel<'a> {
    pub fn new(companies: &'a [String]) -> Self {
        Self { companies }
    }
}

impl Panel for CompaniesPanel<'_> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        ui.label(panel_heading(&UI_TEXT.companies_heading));
        ui.add_space(4.0);

        if self.companies.is_empty() {
            ui.label_subdued(&UI_TEXT.companies_empty);
            return Vec::new();
        }

        for (index, ticker) in self.companies.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.badge(format!("#{}", index + 1), UI_CONFIG.colors.healthy);
                ui.label(
                    RichText::new(ticker)
                        .monospace()
                        .color(UI_CONFIG.colors.heading),
                );
            });
        }
        Vec::new()
    }
}

/// Free-text reasoning behind the prediction.
pub struct ReasoningPanel<'a> {
    reasoning: &'a str,
}

impl<'a> ReasoningPanel<'a> {
    pub fn new(reasoning: &'a str) -> Self {
        Self { reasoning }
    }
}

impl Panel for ReasoningPanel<'_> {
    type Event = ();

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        ui.label(panel_heading(&UI_TEXT.reasoning_heading));
        ui.add_space(4.0);
        ui.label(RichText::new(self.reasoning).color(Color32::LIGHT_GRAY));
        Vec::new()
    }
}
