mod controller;
mod root;
mod state;

pub use controller::{DashboardController, FetchState, HealthStatus};
pub use root::App;
pub use state::Selection;
