//! Reusable Dioxus RSX components for the sunshine dashboard.

mod chart_container;
mod chart_header;
mod city_selector;
mod error_display;
mod loading_spinner;
mod month_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use city_selector::CitySelector;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use month_selector::MonthSelector;
