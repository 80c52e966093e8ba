//! The highlight rule: which traces are shown, which one is the sunshine
//! state of the month, and the caption announcing it.
//!
//! Every call recomputes the complete visual state from the records and the
//! selection. Nothing is carried over from a previous call.

use crate::selection::Selection;
use crate::style;
use crate::trace::Visibility;
use serde::Serialize;
use sunshine_core::{Record, RecordId};

/// Visual state of one trace after an update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceState {
    pub id: RecordId,
    pub visible: Visibility,
    pub showlegend: bool,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DisplayUpdate {
    /// One entry per record, in load order.
    pub traces: Vec<TraceState>,
    /// Empty when nothing matches the selection.
    pub caption: String,
    /// Every trace colored as the monthly maximum, in id order.
    pub highlighted: Vec<RecordId>,
}

impl DisplayUpdate {
    pub fn visible_count(&self) -> usize {
        self.traces
            .iter()
            .filter(|t| t.visible == Visibility::Visible)
            .count()
    }

    pub fn state(&self, id: RecordId) -> Option<&TraceState> {
        self.traces.iter().find(|t| t.id == id)
    }
}

/// Largest sunshine value among the records matching the selection.
pub fn active_max(records: &[Record], selection: &Selection) -> Option<f64> {
    records
        .iter()
        .filter(|r| selection.matches(r))
        .map(|r| r.sunshine)
        .fold(None, |max, s| match max {
            Some(m) if m >= s => Some(m),
            _ => Some(s),
        })
}

pub fn caption_for(record: &Record) -> String {
    format!(
        "Sunshine state of {} is {} with {} hours of sunshine.",
        record.month.display_name(),
        record.city,
        record.sunshine
    )
}

/// Compute the per-trace visual state and caption for `selection`.
///
/// Matching traces are shown; all others become legend-only. The maximum is
/// taken over the matching subset only. When several matching records share
/// that maximum they are all highlighted and the caption names the last of
/// them in load order.
pub fn update_display(records: &[Record], selection: &Selection) -> DisplayUpdate {
    let max = active_max(records, selection);
    let mut update = DisplayUpdate {
        traces: Vec::with_capacity(records.len()),
        ..Default::default()
    };

    for record in records {
        if !selection.matches(record) {
            update.traces.push(TraceState {
                id: record.id,
                visible: Visibility::LegendOnly,
                showlegend: false,
                color: style::DEFAULT_COLOR,
            });
            continue;
        }

        let color = if Some(record.sunshine) == max {
            update.caption = caption_for(record);
            update.highlighted.push(record.id);
            style::HIGHLIGHT_COLOR
        } else {
            style::DEFAULT_COLOR
        };
        update.traces.push(TraceState {
            id: record.id,
            visible: Visibility::Visible,
            showlegend: false,
            color,
        });
    }

    log::debug!(
        "update: month={:?} cities={} visible={} highlighted={:?}",
        selection.month,
        selection.cities.len(),
        update.visible_count(),
        update.highlighted
    );
    update
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunshine_core::MonthKey;

    fn record(id: usize, city: &str, month: MonthKey, sunshine: f64) -> Record {
        Record {
            id: RecordId(id),
            city: city.to_string(),
            month,
            lon: -100.0,
            lat: 35.0,
            sunshine,
        }
    }

    fn scenario() -> Vec<Record> {
        vec![
            record(0, "CityA", MonthKey::Jan, 10.0),
            record(1, "CityB", MonthKey::Jan, 20.0),
            record(2, "CityA", MonthKey::Feb, 5.0),
        ]
    }

    #[test]
    fn test_both_cities_highlights_global_month_max() {
        let records = scenario();
        let selection = Selection::new(Some(MonthKey::Jan), ["CityA", "CityB"]);
        let update = update_display(&records, &selection);

        assert_eq!(
            update.caption,
            "Sunshine state of January is CityB with 20 hours of sunshine."
        );
        assert_eq!(update.highlighted, vec![RecordId(1)]);

        let a = update.state(RecordId(0)).unwrap();
        assert_eq!(a.visible, Visibility::Visible);
        assert_eq!(a.color, "#EDE8BA");
        let b = update.state(RecordId(1)).unwrap();
        assert_eq!(b.visible, Visibility::Visible);
        assert_eq!(b.color, "#FCE570");
        let feb = update.state(RecordId(2)).unwrap();
        assert_eq!(feb.visible, Visibility::LegendOnly);
        assert!(update.traces.iter().all(|t| !t.showlegend));
    }

    #[test]
    fn test_max_restricted_to_selected_cities() {
        let records = scenario();
        let selection = Selection::new(Some(MonthKey::Jan), ["CityA"]);
        let update = update_display(&records, &selection);

        assert_eq!(
            update.caption,
            "Sunshine state of January is CityA with 10 hours of sunshine."
        );
        assert_eq!(update.highlighted, vec![RecordId(0)]);
        assert_eq!(update.state(RecordId(0)).unwrap().color, "#FCE570");
        assert_eq!(
            update.state(RecordId(1)).unwrap().visible,
            Visibility::LegendOnly
        );
        assert_eq!(update.visible_count(), 1);
    }

    #[test]
    fn test_month_without_rows() {
        let records = scenario();
        let selection = Selection::new(Some(MonthKey::Mar), ["CityA", "CityB"]);
        let update = update_display(&records, &selection);

        assert_eq!(update.caption, "");
        assert!(update.highlighted.is_empty());
        assert_eq!(update.traces.len(), 3);
        assert!(update
            .traces
            .iter()
            .all(|t| t.visible == Visibility::LegendOnly && t.color == "#EDE8BA"));
    }

    #[test]
    fn test_empty_selections() {
        let records = scenario();

        let no_month = Selection::from_inputs("", ["CityA", "CityB"]);
        let update = update_display(&records, &no_month);
        assert_eq!(update.caption, "");
        assert!(update.highlighted.is_empty());
        assert_eq!(update.visible_count(), 0);

        let no_cities = Selection::new(Some(MonthKey::Jan), Vec::<String>::new());
        let update = update_display(&records, &no_cities);
        assert_eq!(update.caption, "");
        assert!(update.highlighted.is_empty());
        assert_eq!(update.visible_count(), 0);
    }

    #[test]
    fn test_unknown_month_input_is_no_match() {
        let records = scenario();
        let selection = Selection::from_inputs("Smarch", ["CityA", "CityB"]);
        let update = update_display(&records, &selection);

        assert_eq!(update.caption, "");
        assert!(update.highlighted.is_empty());
        assert_eq!(update.traces.len(), 3);
        assert!(update.traces.iter().all(|t| t.visible == Visibility::LegendOnly
            && !t.showlegend
            && t.color == "#EDE8BA"));
    }

    #[test]
    fn test_unknown_city_is_no_match() {
        let records = scenario();
        let selection = Selection::new(Some(MonthKey::Jan), ["Atlantis"]);
        let update = update_display(&records, &selection);
        assert_eq!(update.caption, "");
        assert_eq!(update.visible_count(), 0);
    }

    #[test]
    fn test_empty_dataset() {
        let selection = Selection::new(Some(MonthKey::Jan), ["CityA"]);
        let update = update_display(&[], &selection);
        assert!(update.traces.is_empty());
        assert_eq!(update.caption, "");
    }

    #[test]
    fn test_tie_highlights_all_and_last_caption_wins() {
        let records = vec![
            record(0, "CityA", MonthKey::Jun, 30.0),
            record(1, "CityB", MonthKey::Jun, 12.0),
            record(2, "CityC", MonthKey::Jun, 30.0),
        ];
        let selection = Selection::new(Some(MonthKey::Jun), ["CityA", "CityB", "CityC"]);
        let update = update_display(&records, &selection);

        assert_eq!(update.highlighted, vec![RecordId(0), RecordId(2)]);
        assert_eq!(update.state(RecordId(0)).unwrap().color, "#FCE570");
        assert_eq!(update.state(RecordId(2)).unwrap().color, "#FCE570");
        assert_eq!(
            update.caption,
            "Sunshine state of June is CityC with 30 hours of sunshine."
        );
    }

    #[test]
    fn test_idempotent() {
        let records = scenario();
        let selection = Selection::new(Some(MonthKey::Jan), ["CityA", "CityB"]);
        assert_eq!(
            update_display(&records, &selection),
            update_display(&records, &selection)
        );
    }

    #[test]
    fn test_visible_count_matches_filter_for_all_selections() {
        let records = vec![
            record(0, "CityA", MonthKey::Jan, 10.0),
            record(1, "CityB", MonthKey::Jan, 20.0),
            record(2, "CityA", MonthKey::Feb, 5.0),
            record(3, "CityC", MonthKey::Feb, 7.5),
            record(4, "CityB", MonthKey::Mar, 9.0),
        ];
        let subsets: Vec<Vec<&str>> = vec![
            vec![],
            vec!["CityA"],
            vec!["CityB", "CityC"],
            vec!["CityA", "CityB", "CityC"],
        ];
        for month in MonthKey::ALL {
            for cities in &subsets {
                let selection = Selection::new(Some(month), cities.iter().copied());
                let update = update_display(&records, &selection);
                let expected = records.iter().filter(|r| selection.matches(r)).count();
                assert_eq!(update.visible_count(), expected);
                assert_eq!(update.traces.len(), records.len());

                // highlighted value equals the subset maximum
                let subset_max = active_max(&records, &selection);
                for id in &update.highlighted {
                    assert_eq!(Some(records[id.0].sunshine), subset_max);
                }
                assert_eq!(update.caption.is_empty(), subset_max.is_none());
            }
        }
    }

    #[test]
    fn test_fractional_caption() {
        let records = vec![record(0, "Boston", MonthKey::Dec, 136.9)];
        let selection = Selection::new(Some(MonthKey::Dec), ["Boston"]);
        let update = update_display(&records, &selection);
        assert_eq!(
            update.caption,
            "Sunshine state of December is Boston with 136.9 hours of sunshine."
        );
    }
}
