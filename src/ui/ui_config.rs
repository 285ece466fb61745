use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub panel_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,

    pub bullish: Color32,
    pub bearish: Color32,
    pub healthy: Color32,
    pub unhealthy: Color32,
    pub warning: Color32,
    pub alert_background: Color32,
    pub badge_outline: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(230, 230, 240),
        panel_heading: Color32::from_rgb(167, 139, 250), // soft purple
        central_panel: Color32::from_rgb(13, 13, 20),
        side_panel: Color32::from_rgb(20, 20, 28),

        bullish: Color32::from_rgb(0, 255, 163),
        bearish: Color32::from_rgb(255, 51, 102),
        healthy: Color32::from_rgb(77, 236, 163),
        unhealthy: Color32::from_rgb(255, 127, 154),
        warning: Color32::from_rgb(245, 194, 107),
        alert_background: Color32::from_rgb(60, 20, 30),
        badge_outline: Color32::from_gray(90),
    },
};

impl UiConfig {
    /// Frame for the top toolbar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for panel cards in the central area
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::new(1.0, Color32::from_gray(45)),
            inner_margin: Margin::same(10),
            corner_radius: 6.into(),
            ..Default::default()
        }
    }

    /// Frame for the dismissible error alert
    pub fn alert_frame(&self) -> Frame {
        Frame {
            fill: self.colors.alert_background,
            stroke: Stroke::new(1.0, self.colors.bearish),
            inner_margin: Margin::same(8),
            corner_radius: 6.into(),
            ..Default::default()
        }
    }
}
