//! Sunshine State of the Month
//!
//! Plots monthly sunshine hours for a set of US cities as bubbles on a map.
//! The user picks cities and a month; the city with the most sunshine among
//! the picked ones is highlighted and named in the map title.
//!
//! Data flow:
//! 1. `build.rs` checks `sunshine.csv` and copies it into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount: parse the CSV and build one hidden trace per row.
//! 4. On city or month change: recompute every trace's state and the
//!    caption, then re-render the whole figure via D3.js.

use dioxus::prelude::*;
use sunshine_chart_ui::components::{
    ChartContainer, ChartHeader, CitySelector, ErrorDisplay, LoadingSpinner, MonthSelector,
};
use sunshine_chart_ui::js_bridge;
use sunshine_chart_ui::state::AppState;
use sunshine_core::Dataset;
use sunshine_data::{build_traces, update_display, FigureSnapshot, TraceSpec};

const SUNSHINE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/sunshine.csv"));

/// DOM id for the D3 map container div.
const MAP_CONTAINER_ID: &str = "sunshine-map";

/// US state outlines (GeoJSON FeatureCollection) drawn under the bubbles.
const STATES_GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/PublicaMundi/MappingAPI/master/data/geojson/us-states.json";

const PAGE_TITLE: &str = "Sunshine state of the month";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sunshine-map-root"))
        .launch(App);
}

/// Parse the embedded CSV. An empty dataset is reported like a parse failure.
fn load_embedded(csv_data: &str) -> Result<Dataset, String> {
    let dataset = Dataset::from_csv(csv_data)
        .map_err(|e| format!("Failed to load sunshine data: {}", e))?;
    if dataset.is_empty() {
        return Err("No sunshine data available.".to_string());
    }
    Ok(dataset)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    // Startup traces, one per record. Never modified after load.
    let mut base_traces: Signal<Vec<TraceSpec>> = use_signal(Vec::new);

    // ─── Effect 1: Parse CSV once on mount ───
    use_effect(move || match load_embedded(SUNSHINE_CSV) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} sunshine records for {} cities",
                dataset.len(),
                dataset.cities().len()
            );
            base_traces.set(build_traces(dataset.records()));
            // All cities start checked, no month is chosen.
            state.selected_cities.set(dataset.cities());
            state.dataset.set(Some(dataset));
            state.loading.set(false);

            // Initialize D3 map scripts (one-time)
            js_bridge::init_charts();
        }
        Err(msg) => {
            log::error!("{}", msg);
            state.error_msg.set(Some(msg));
            state.loading.set(false);
        }
    });

    // ─── Effect 2: Recompute trace states and re-render ───
    // Re-runs whenever loading, selected_month or selected_cities change.
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let selection = state.selection();

        let figure = {
            let dataset = state.dataset.read();
            let Some(dataset) = dataset.as_ref() else {
                return;
            };
            let update = update_display(dataset.records(), &selection);
            FigureSnapshot::render(&base_traces.read(), &update)
        };

        let figure_json = match figure.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to serialize figure: {}", e);
                return;
            }
        };
        let config_json = serde_json::json!({ "geoUrl": STATES_GEOJSON_URL }).to_string();

        js_bridge::render_sunshine_map(MAP_CONTAINER_ID, &figure_json, &config_json);
    });

    use_drop(|| js_bridge::destroy_chart(MAP_CONTAINER_ID));

    let city_count = state
        .dataset
        .read()
        .as_ref()
        .map(|d| d.cities().len())
        .unwrap_or(0);

    // ─── Render ───
    rsx! {
        div {
            style: "margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else {
                ChartHeader {
                    title: PAGE_TITLE.to_string(),
                    subtitle: format!("Monthly hours of sunshine across {} US cities", city_count),
                }

                CitySelector {}

                MonthSelector {}

                ChartContainer {
                    id: MAP_CONTAINER_ID.to_string(),
                    loading: *state.loading.read(),
                    min_height: sunshine_data::style::MAP_HEIGHT,
                }
            }
        }
    }
}
