mod chart;
mod styles;
mod ticker;
mod ui_config;
mod ui_panels;
mod ui_text;

pub(crate) use chart::render_trend_chart;
pub(crate) use styles::UiStyleExt;
pub(crate) use ticker::TickerState;
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_panels::{
    CompaniesPanel, ControlsPanel, Panel, PredictionPanel, ReasoningPanel, SectorsPanel,
    SelectionChanged,
};
pub(crate) use ui_text::UI_TEXT;
