//! Command implementations for the sunshine CLI.
//!
//! Every subcommand loads the dataset, builds a [`Selection`] from its
//! arguments and runs the same highlight rule the dashboard uses.

use clap::{Args, Subcommand};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use sunshine_core::{Dataset, MonthKey};
use sunshine_data::Selection;

pub mod figure;
pub mod load;
pub mod report;

/// Month and city filter shared by the subcommands.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Month abbreviation (Jan..Dec)
    #[arg(short, long)]
    pub month: Option<MonthKey>,

    /// City to include; repeat for several. Defaults to every city in the dataset.
    #[arg(short, long = "city")]
    pub cities: Vec<String>,
}

impl SelectionArgs {
    /// Resolve against the dataset: no `--city` means all cities are selected.
    pub fn resolve(&self, dataset: &Dataset) -> Selection {
        let known: BTreeSet<String> = dataset.cities().into_iter().collect();
        if self.cities.is_empty() {
            return Selection::new(self.month, known);
        }
        for city in self.cities.iter().filter(|c| !known.contains(*c)) {
            log::warn!("City '{}' is not in the dataset", city);
        }
        Selection::new(self.month, self.cities.iter().cloned())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the sunshine state of the month for a selection
    State {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print every trace's visibility and color for a selection
    Traces {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Write the map figure for a selection as JSON
    Figure {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output path for the figure JSON
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the sunshine state of every month with all cities selected
    Summary,
}

pub async fn run(data: &Path, command: Command) -> anyhow::Result<()> {
    let dataset = load::load_dataset(data).await?;

    match command {
        Command::State { selection } => {
            let selection = selection.resolve(&dataset);
            println!("{}", report::state_line(&dataset, &selection));
        }
        Command::Traces { selection } => {
            let selection = selection.resolve(&dataset);
            print!("{}", report::trace_table(&dataset, &selection));
        }
        Command::Figure { selection, output } => {
            let selection = selection.resolve(&dataset);
            figure::write_figure(&dataset, &selection, &output).await?;
        }
        Command::Summary => {
            for line in report::summary(&dataset) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
