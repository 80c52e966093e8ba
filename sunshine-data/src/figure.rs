//! Immutable figure snapshots handed to the map renderer.

use crate::style;
use crate::trace::TraceSpec;
use crate::update::{DisplayUpdate, TraceState};
use serde::Serialize;
use std::collections::HashMap;
use sunshine_core::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayout {
    pub title: String,
    pub title_font_size: u32,
    pub height: u32,
    pub showlegend: bool,
    /// `"h"` lays the legend out horizontally above the map.
    pub legend_orientation: String,
    pub land_color: String,
    pub scope: String,
}

impl Default for MapLayout {
    fn default() -> Self {
        Self {
            title: String::new(),
            title_font_size: style::TITLE_FONT_SIZE,
            height: style::MAP_HEIGHT,
            showlegend: true,
            legend_orientation: "h".to_string(),
            land_color: style::LAND_COLOR.to_string(),
            scope: "usa".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureSnapshot {
    pub traces: Vec<TraceSpec>,
    pub layout: MapLayout,
}

impl FigureSnapshot {
    /// Apply `update` to copies of the base traces.
    ///
    /// States are matched to traces by id. A base trace with no state in the
    /// update keeps its startup appearance.
    pub fn render(base: &[TraceSpec], update: &DisplayUpdate) -> Self {
        let states: HashMap<RecordId, &TraceState> =
            update.traces.iter().map(|s| (s.id, s)).collect();

        let traces = base
            .iter()
            .map(|trace| {
                let mut trace = trace.clone();
                if let Some(state) = states.get(&trace.id) {
                    trace.visible = state.visible;
                    trace.showlegend = state.showlegend;
                    trace.marker.color = state.color.to_string();
                }
                trace
            })
            .collect();

        Self {
            traces,
            layout: MapLayout {
                title: update.caption.clone(),
                ..MapLayout::default()
            },
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;
    use crate::trace::{build_traces, Visibility};
    use crate::update::update_display;
    use sunshine_core::{MonthKey, Record};

    fn records() -> Vec<Record> {
        vec![
            Record {
                id: RecordId(0),
                city: "CityA".to_string(),
                month: MonthKey::Jan,
                lon: -110.0,
                lat: 32.0,
                sunshine: 10.0,
            },
            Record {
                id: RecordId(1),
                city: "CityB".to_string(),
                month: MonthKey::Jan,
                lon: -100.0,
                lat: 40.0,
                sunshine: 20.0,
            },
        ]
    }

    #[test]
    fn test_render_applies_update() {
        let records = records();
        let base = build_traces(&records);
        let update = update_display(&records, &Selection::new(Some(MonthKey::Jan), ["CityA"]));
        let figure = FigureSnapshot::render(&base, &update);

        assert_eq!(figure.layout.title, update.caption);
        assert_eq!(figure.traces[0].visible, Visibility::Visible);
        assert_eq!(figure.traces[0].marker.color, "#FCE570");
        assert!(!figure.traces[0].showlegend);
        assert_eq!(figure.traces[1].visible, Visibility::LegendOnly);
        assert_eq!(figure.traces[1].marker.color, "#EDE8BA");

        // base traces are untouched
        assert_eq!(base[0].visible, Visibility::Hidden);
        assert_eq!(base[0].marker.color, "#EDE8BA");
    }

    #[test]
    fn test_render_replaces_previous_state() {
        let records = records();
        let base = build_traces(&records);
        let first = update_display(&records, &Selection::new(Some(MonthKey::Jan), ["CityA"]));
        let second = update_display(&records, &Selection::new(Some(MonthKey::Jan), ["CityA", "CityB"]));

        let _ = FigureSnapshot::render(&base, &first);
        let figure = FigureSnapshot::render(&base, &second);
        assert_eq!(figure.traces[0].marker.color, "#EDE8BA");
        assert_eq!(figure.traces[1].marker.color, "#FCE570");
    }

    #[test]
    fn test_unmatched_state_keeps_startup_look_and_json_shape() {
        let base = build_traces(&records());
        let figure = FigureSnapshot::render(&base, &DisplayUpdate::default());
        assert_eq!(figure.layout.title, "");
        assert_eq!(figure.layout.height, 800);
        assert_eq!(figure.traces, base);

        let value: serde_json::Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();
        assert_eq!(value["traces"][0]["visible"], serde_json::json!(false));
        assert_eq!(value["traces"][0]["name"], "Jan");
        assert_eq!(value["traces"][1]["id"], 1);
        assert_eq!(value["layout"]["scope"], "usa");
        assert_eq!(value["layout"]["land_color"], "rgb(217, 217, 217)");
    }
}
