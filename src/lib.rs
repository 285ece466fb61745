#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;
pub mod utils;

pub use app::App;
pub use data::{DemoProvider, HttpProvider, PredictionProvider};
pub use models::{Prediction, PredictionRequest};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the prediction backend. Without it the app runs against
    /// the built-in demo provider.
    #[arg(long)]
    pub backend_url: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
