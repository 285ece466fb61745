use clap::Parser;
use eframe::NativeOptions;
use std::panic;

use market_pulse::{Cli, run_app};

fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("market_pulse"), my_code_level)
        .init();

    let args = Cli::parse();
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Market Pulse - Hybrid ML + LLM Prediction Engine"),
        ..Default::default()
    };

    eframe::run_native(
        "Market Pulse",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}
