use std::path::Path;
use sunshine_core::Dataset;
use sunshine_data::{build_traces, update_display, FigureSnapshot, Selection};

/// The figure the dashboard would render for `selection`.
pub fn figure_for(dataset: &Dataset, selection: &Selection) -> FigureSnapshot {
    let base = build_traces(dataset.records());
    let update = update_display(dataset.records(), selection);
    FigureSnapshot::render(&base, &update)
}

/// Write the figure for `selection` to `output` as JSON.
pub async fn write_figure(
    dataset: &Dataset,
    selection: &Selection,
    output: &Path,
) -> anyhow::Result<()> {
    let figure = figure_for(dataset, selection);
    let json = figure.to_json()?;
    tokio::fs::write(output, json).await?;
    log::info!(
        "Wrote figure with {} traces to {}",
        figure.traces.len(),
        output.display()
    );
    Ok(())
}
