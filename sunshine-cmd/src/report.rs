//! Plain-text reports of the highlight rule.

use std::collections::HashMap;
use std::fmt::Write;
use sunshine_core::{Dataset, Record, RecordId};
use sunshine_data::{update_display, DisplayUpdate, Selection, TraceState, Visibility};

/// The caption for the selection, or a notice when nothing matches.
pub fn state_line(dataset: &Dataset, selection: &Selection) -> String {
    let update = update_display(dataset.records(), selection);
    if !update.caption.is_empty() {
        return update.caption;
    }
    match selection.month {
        Some(month) => format!(
            "No sunshine records for {} in the selected cities.",
            month.display_name()
        ),
        None => "No month selected.".to_string(),
    }
}

/// One line per trace: id, city, month, hours, visibility and color.
pub fn trace_table(dataset: &Dataset, selection: &Selection) -> String {
    let update = update_display(dataset.records(), selection);
    format_trace_table(dataset.records(), &update)
}

/// Rows follow `records`. Each row's state is looked up by record id; a
/// record without a state is skipped.
fn format_trace_table(records: &[Record], update: &DisplayUpdate) -> String {
    let states: HashMap<RecordId, &TraceState> =
        update.traces.iter().map(|s| (s.id, s)).collect();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<16} {:<5} {:>8}  {:<11} {}",
        "id", "city", "month", "hours", "visible", "color"
    );
    for record in records {
        let Some(state) = states.get(&record.id) else {
            continue;
        };
        let visible = match state.visible {
            Visibility::Visible => "yes",
            Visibility::LegendOnly => "legend-only",
            Visibility::Hidden => "no",
        };
        let _ = writeln!(
            out,
            "{:>4}  {:<16} {:<5} {:>8}  {:<11} {}",
            record.id,
            record.city,
            record.month,
            record.sunshine,
            visible,
            state.color
        );
    }
    if !update.caption.is_empty() {
        let _ = writeln!(out, "{}", update.caption);
    }
    out
}

/// Sunshine state of every month in the dataset with all cities selected.
pub fn summary(dataset: &Dataset) -> Vec<String> {
    let cities = dataset.cities();
    dataset
        .months()
        .into_iter()
        .map(|month| {
            let selection = Selection::new(Some(month), cities.iter().cloned());
            format!("{}: {}", month, state_line(dataset, &selection))
        })
        .collect()
}
