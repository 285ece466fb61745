use eframe::egui::Color32;

pub struct TickerQuote {
    pub symbol: &'static str,
    pub price: &'static str,
    pub change: &'static str,
    pub up: bool,
}

pub struct TickerConfig {
    pub height: f32,
    pub speed_pixels_per_sec: f32,
    pub font_size: f32,
    pub item_spacing: f32,
    pub background_color: Color32,

    pub text_color_up: Color32,
    pub text_color_down: Color32,
    pub text_color_symbol: Color32,

    pub quotes: &'static [TickerQuote],
}

pub const TICKER: TickerConfig = TickerConfig {
    height: 18.0,
    speed_pixels_per_sec: 60.0, // Keep at 60 - smooth on 60fps monitors
    font_size: 10.0,
    item_spacing: 40.0,
    background_color: Color32::from_rgb(10, 10, 15),

    text_color_up: Color32::GREEN,
    text_color_down: Color32::RED,
    text_color_symbol: Color32::LIGHT_GRAY,

    // Static quotes: the strip is decorative, there is no live feed behind it.
    quotes: &[
        TickerQuote { symbol: "SPX", price: "4,785.24", change: "+1.2%", up: true },
        TickerQuote { symbol: "NDX", price: "16,832.91", change: "+0.8%", up: true },
        TickerQuote { symbol: "DJI", price: "37,645.18", change: "-0.3%", up: false },
        TickerQuote { symbol: "VIX", price: "13.45", change: "-2.1%", up: false },
        TickerQuote { symbol: "AAPL", price: "192.45", change: "+0.5%", up: true },
        TickerQuote { symbol: "MSFT", price: "375.12", change: "+1.1%", up: true },
        TickerQuote { symbol: "NVDA", price: "485.09", change: "+2.4%", up: true },
        TickerQuote { symbol: "TSLA", price: "245.67", change: "-1.2%", up: false },
    ],
};
