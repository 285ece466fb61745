use eframe::egui::{Color32, RichText, Ui};

use crate::config::Direction;
use crate::ui::UI_CONFIG;

pub(crate) fn panel_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .strong()
        .color(UI_CONFIG.colors.panel_heading)
}

pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for Direction {
    fn color(&self) -> Color32 {
        match self {
            Self::Up => UI_CONFIG.colors.bullish,
            Self::Down => UI_CONFIG.colors.bearish,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    /// Small outlined status chip, e.g. "Demo Mode" or "#3".
    fn badge(&mut self, text: impl Into<String>, color: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(Color32::GRAY));
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0; // Tight spacing
            ui.label_subdued(format!("{}:", label));
            ui.label(RichText::new(value).small().color(color));
        });
    }

    fn badge(&mut self, text: impl Into<String>, color: Color32) {
        eframe::egui::Frame {
            stroke: eframe::egui::Stroke::new(1.0, color),
            inner_margin: eframe::egui::Margin::symmetric(6, 2),
            corner_radius: 8.into(),
            ..Default::default()
        }
        .show(self, |ui| {
            ui.label(RichText::new(text).small().color(color));
        });
    }
}
