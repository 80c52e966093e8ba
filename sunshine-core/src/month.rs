use crate::error::UnknownMonth;
use chrono::Month;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-letter month key as it appears in the dataset's `month` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MonthKey {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl MonthKey {
    /// All keys in calendar order.
    pub const ALL: [MonthKey; 12] = [
        MonthKey::Jan,
        MonthKey::Feb,
        MonthKey::Mar,
        MonthKey::Apr,
        MonthKey::May,
        MonthKey::Jun,
        MonthKey::Jul,
        MonthKey::Aug,
        MonthKey::Sep,
        MonthKey::Oct,
        MonthKey::Nov,
        MonthKey::Dec,
    ];

    /// Look up a key by its exact abbreviation (`"Jan"`, `"Feb"`, ...).
    ///
    /// Anything else, including the empty string, yields `None`.
    pub fn from_abbreviation(s: &str) -> Option<MonthKey> {
        MonthKey::ALL.iter().copied().find(|m| m.abbreviation() == s)
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            MonthKey::Jan => "Jan",
            MonthKey::Feb => "Feb",
            MonthKey::Mar => "Mar",
            MonthKey::Apr => "Apr",
            MonthKey::May => "May",
            MonthKey::Jun => "Jun",
            MonthKey::Jul => "Jul",
            MonthKey::Aug => "Aug",
            MonthKey::Sep => "Sep",
            MonthKey::Oct => "Oct",
            MonthKey::Nov => "Nov",
            MonthKey::Dec => "Dec",
        }
    }

    /// Full English month name used in captions and selector labels.
    pub fn display_name(&self) -> &'static str {
        self.as_chrono().name()
    }

    pub fn as_chrono(&self) -> Month {
        match self {
            MonthKey::Jan => Month::January,
            MonthKey::Feb => Month::February,
            MonthKey::Mar => Month::March,
            MonthKey::Apr => Month::April,
            MonthKey::May => Month::May,
            MonthKey::Jun => Month::June,
            MonthKey::Jul => Month::July,
            MonthKey::Aug => Month::August,
            MonthKey::Sep => Month::September,
            MonthKey::Oct => Month::October,
            MonthKey::Nov => Month::November,
            MonthKey::Dec => Month::December,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.abbreviation())
    }
}

impl FromStr for MonthKey {
    type Err = UnknownMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MonthKey::from_abbreviation(s).ok_or_else(|| UnknownMonth(s.to_string()))
    }
}
