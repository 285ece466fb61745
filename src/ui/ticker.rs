use eframe::egui::{FontId, Pos2, Rect, Sense, Ui, Vec2};

use crate::config::TICKER;

/// Scrolling quote strip across the top of the dashboard. The quotes are
/// static decoration; only the scroll offset is state.
pub struct TickerState {
    // Horizontal offset (pixels)
    offset: f32,
    is_hovered: bool,
}

impl Default for TickerState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            is_hovered: false,
        }
    }
}

impl TickerState {
    fn format_quote(symbol: &str, price: &str, change: &str) -> String {
        format!("{symbol} {price} ({change})")
    }

    pub fn render(&mut self, ui: &mut Ui) {
        let rect = ui.available_rect_before_wrap();
        let height = TICKER.height;
        let panel_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), height));
        let response = ui.allocate_rect(panel_rect, Sense::hover());
        ui.painter()
            .rect_filled(panel_rect, 0.0, TICKER.background_color);

        // Pause while hovered so the quotes are readable.
        self.is_hovered = response.hovered();
        if !self.is_hovered {
            // Clamp dt so a lag spike can't teleport the strip.
            let dt = ui.input(|i| i.stable_dt).min(0.05);
            self.offset -= TICKER.speed_pixels_per_sec * dt;
        }

        let painter = ui.painter().with_clip_rect(panel_rect);
        let font_id = FontId::monospace(TICKER.font_size);

        // Pass 1: total width, needed for the wrap point.
        let mut total_width = 0.0;
        for quote in TICKER.quotes {
            let text = Self::format_quote(quote.symbol, quote.price, quote.change);
            let galley = painter.layout_no_wrap(text, font_id.clone(), TICKER.text_color_symbol);
            total_width += galley.size().x + TICKER.item_spacing;
        }
        if total_width < 1.0 {
            return;
        }

        // Infinite scroll: keep the offset negative-flowing within one loop.
        self.offset %= total_width;
        if self.offset > 0.0 {
            self.offset -= total_width;
        }

        // Pass 2: draw enough loops to cover the visible width.
        let screen_width = panel_rect.width();
        let start_pos = panel_rect.min;
        let loops_needed = (screen_width / total_width).ceil() as i32 + 2;

        for loop_idx in 0..loops_needed {
            let mut loop_x = self.offset + (loop_idx as f32 * total_width);

            for quote in TICKER.quotes {
                let color = if quote.up {
                    TICKER.text_color_up
                } else {
                    TICKER.text_color_down
                };
                let text = Self::format_quote(quote.symbol, quote.price, quote.change);
                let galley = painter.layout_no_wrap(text, font_id.clone(), color);
                let w = galley.size().x;
                let h = galley.size().y;

                if loop_x + w > 0.0 && loop_x < screen_width {
                    let x_snapped = (start_pos.x + loop_x).round();
                    let y_snapped = (start_pos.y + (height - h) / 2.0).round();
                    painter.galley(Pos2::new(x_snapped, y_snapped), galley, color);
                }

                loop_x += w + TICKER.item_spacing;
            }
        }

        if !self.is_hovered {
            ui.ctx().request_repaint();
        }
    }
}
