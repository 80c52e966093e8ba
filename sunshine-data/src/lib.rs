//! Turns loaded sunshine records into map traces and recomputes their
//! visual state for each user selection.
//!
//! Data flow:
//! 1. [`trace::build_traces`] produces one hidden marker per record, once.
//! 2. The user picks a month and a set of cities ([`selection::Selection`]).
//! 3. [`update::update_display`] decides visibility and color per trace and
//!    finds the sunshine state of the month.
//! 4. [`figure::FigureSnapshot::render`] applies that state to the base
//!    traces, producing a fresh figure for the renderer.

pub mod figure;
pub mod selection;
pub mod trace;
pub mod update;

pub use figure::{FigureSnapshot, MapLayout};
pub use selection::Selection;
pub use trace::{build_traces, Marker, TraceSpec, Visibility};
pub use update::{update_display, DisplayUpdate, TraceState};

/// Fixed colors and sizing shared by the dashboard and the CLI.
pub mod style {
    /// Marker color of every trace that is not the monthly maximum.
    pub const DEFAULT_COLOR: &str = "#EDE8BA";
    /// Marker color of the sunshine state of the month.
    pub const HIGHLIGHT_COLOR: &str = "#FCE570";
    pub const MARKER_LINE_COLOR: &str = "black";
    pub const MARKER_LINE_WIDTH: f64 = 0.5;
    /// Sunshine hours are divided by this to get the marker diameter.
    pub const MARKER_SIZE_DIVISOR: f64 = 3.5;
    pub const LAND_COLOR: &str = "rgb(217, 217, 217)";
    pub const MAP_HEIGHT: u32 = 800;
    pub const TITLE_FONT_SIZE: u32 = 30;
}
