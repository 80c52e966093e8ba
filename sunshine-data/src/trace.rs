//! Map trace construction.

use crate::style;
use serde::{Serialize, Serializer};
use sunshine_core::{Record, RecordId};

/// Trace visibility as understood by the map renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Not drawn and not listed in the legend.
    Hidden,
    /// Drawn on the map.
    Visible,
    /// Listed in the legend but not drawn.
    LegendOnly,
}

// The renderer takes `true`, `false` or `"legendonly"`.
impl Serialize for Visibility {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Visibility::Hidden => serializer.serialize_bool(false),
            Visibility::Visible => serializer.serialize_bool(true),
            Visibility::LegendOnly => serializer.serialize_str("legendonly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Diameter in pixels
    pub size: f64,
    pub color: String,
    pub line_color: String,
    pub line_width: f64,
    pub sizemode: String,
}

/// One renderable marker for a single record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceSpec {
    pub id: RecordId,
    pub lon: f64,
    pub lat: f64,
    /// Hover text, e.g. `Yuma:Hours of sunshine: 242`
    pub text: String,
    /// Legend entry, the record's month abbreviation
    pub name: String,
    pub visible: Visibility,
    pub showlegend: bool,
    pub marker: Marker,
}

impl TraceSpec {
    pub fn from_record(record: &Record) -> Self {
        TraceSpec {
            id: record.id,
            lon: record.lon,
            lat: record.lat,
            text: format!("{}:Hours of sunshine: {}", record.city, record.sunshine),
            name: record.month.abbreviation().to_string(),
            visible: Visibility::Hidden,
            showlegend: true,
            marker: Marker {
                size: record.sunshine / style::MARKER_SIZE_DIVISOR,
                color: style::DEFAULT_COLOR.to_string(),
                line_color: style::MARKER_LINE_COLOR.to_string(),
                line_width: style::MARKER_LINE_WIDTH,
                sizemode: "diameter".to_string(),
            },
        }
    }
}

/// Build the initial trace list, one trace per record in load order.
pub fn build_traces(records: &[Record]) -> Vec<TraceSpec> {
    records.iter().map(TraceSpec::from_record).collect()
}
