//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use sunshine_core::Dataset;
use sunshine_data::Selection;

/// Shared application state for the sunshine map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until parsed)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Selected month abbreviation; empty until the user picks one
    pub selected_month: Signal<String>,
    /// Checked cities, in dataset order
    pub selected_cities: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_month: Signal::new(String::new()),
            selected_cities: Signal::new(Vec::new()),
        }
    }

    /// Snapshot of the two selector inputs as a [`Selection`].
    pub fn selection(&self) -> Selection {
        Selection::from_inputs(
            &(self.selected_month)(),
            self.selected_cities.read().iter().cloned(),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
