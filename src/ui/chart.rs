use eframe::egui::{Color32, Ui, Vec2b};
use egui_plot::{Line, Plot, PlotPoints};

use crate::config::Direction;
use crate::models::Prediction;
use crate::ui::styles::{DirectionColor, UiStyleExt, panel_heading};
use crate::ui::{UI_CONFIG, UI_TEXT};

const CHART_DAYS: usize = 30;
const BASE_VALUE: f64 = 4500.0;

/// Deterministic 30-day series: a fixed sin/cos wobble around the index
/// base, sloped by the predicted direction. Stand-in for real history -
/// in production this would come from the backend.
fn trend_series(direction: Option<Direction>) -> Vec<[f64; 2]> {
    let trend = match direction {
        Some(Direction::Up) => 1.0,
        Some(Direction::Down) => -1.0,
        None => 0.0,
    };
    (0..CHART_DAYS)
        .map(|i| {
            let x = i as f64;
            let wobble = (x * 0.5).sin() * 50.0 + (x * 0.3).cos() * 30.0;
            [x + 1.0, BASE_VALUE + wobble + x * 10.0 * trend]
        })
        .collect()
}

/// Market trend card with the direction-colored area chart.
pub fn render_trend_chart(ui: &mut Ui, prediction: Option<&Prediction>) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(panel_heading(&UI_TEXT.chart_heading));
            ui.label_subdued(&UI_TEXT.chart_subtitle);
        });

        if let Some(p) = prediction {
            let (badge, color) = if p.direction.is_up() {
                (&UI_TEXT.badge_bullish, UI_CONFIG.colors.bullish)
            } else {
                (&UI_TEXT.badge_bearish, UI_CONFIG.colors.bearish)
            };
            ui.badge(badge, color);
            ui.badge(
                format!("{} {}", UI_TEXT.chart_confidence_prefix, p.confidence()),
                UI_CONFIG.colors.badge_outline,
            );
        }
    });
    ui.add_space(4.0);

    let direction = prediction.map(|p| p.direction);
    let color = direction.map_or(Color32::GRAY, |d| d.color());
    let points = trend_series(direction);

    Plot::new("trend_chart")
        .height(200.0)
        .allow_drag(Vec2b::FALSE)
        .allow_zoom(Vec2b::FALSE)
        .allow_scroll(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .y_axis_formatter(|mark, _range| format!("${:.0}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("", PlotPoints::new(points))
                    .color(color)
                    .width(2.0)
                    .fill((BASE_VALUE - 150.0) as f32)
                    .fill_alpha(0.15),
            );
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_is_deterministic_and_thirty_points() {
        let a = trend_series(Some(Direction::Up));
        let b = trend_series(Some(Direction::Up));
        assert_eq!(a.len(), CHART_DAYS);
        assert_eq!(a, b);
    }

    #[test]
    fn direction_sets_the_slope() {
        let up = trend_series(Some(Direction::Up));
        let down = trend_series(Some(Direction::Down));
        // Same wobble, opposite trend: up ends above its start, down below.
        assert!(up[CHART_DAYS - 1][1] > up[0][1]);
        assert!(down[CHART_DAYS - 1][1] < down[0][1]);
    }
}
