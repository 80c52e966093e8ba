use std::collections::BTreeSet;
use sunshine_core::{MonthKey, Record};

/// The user's current filter: a month (or none yet) and a set of cities.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub month: Option<MonthKey>,
    pub cities: BTreeSet<String>,
}

impl Selection {
    pub fn new<I, S>(month: Option<MonthKey>, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            month,
            cities: cities.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a selection from raw widget values.
    ///
    /// An empty or unknown month string means no month is selected.
    pub fn from_inputs<I, S>(month: &str, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(MonthKey::from_abbreviation(month.trim()), cities)
    }

    /// True when the record belongs to the selected month and cities.
    pub fn matches(&self, record: &Record) -> bool {
        match self.month {
            Some(month) => record.month == month && self.cities.contains(&record.city),
            None => false,
        }
    }
}
