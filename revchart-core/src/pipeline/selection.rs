//! Company selection: which series are drawn.
//!
//! A `SelectionSet` is an ordered set of tickers. It only changes through
//! [`SelectionSet::toggle`], which returns a new set and leaves the old
//! one untouched.

use serde::{Deserialize, Serialize};

use crate::domain::{CompanySeries, Ticker};

/// How many companies are selected when data first arrives.
pub const INITIAL_SELECTION_COUNT: usize = 3;

/// Ordered set of selected company identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: Vec<Ticker>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first `count` distinct companies, in the order given.
    pub fn seeded<'a>(companies: impl IntoIterator<Item = &'a str>, count: usize) -> Self {
        let mut set = Self::new();
        for company in companies {
            if set.len() >= count {
                break;
            }
            if !set.contains(company) {
                set.ids.push(company.to_string());
            }
        }
        set
    }

    /// A new set with `id` removed if present, or appended if absent.
    #[must_use]
    pub fn toggle(&self, id: &str) -> Self {
        let mut ids = self.ids.clone();
        match ids.iter().position(|s| s == id) {
            Some(idx) => {
                ids.remove(idx);
            }
            None => ids.push(id.to_string()),
        }
        Self { ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            let id = id.as_ref();
            if !set.contains(id) {
                set.ids.push(id.to_string());
            }
        }
        set
    }
}

/// Free-function form of [`SelectionSet::toggle`].
pub fn toggle(set: &SelectionSet, id: &str) -> SelectionSet {
    set.toggle(id)
}

/// Series whose company is selected, in series order (not selection order).
pub fn filter_series<'a>(
    series: &'a [CompanySeries],
    selection: &SelectionSet,
) -> Vec<&'a CompanySeries> {
    series
        .iter()
        .filter(|s| selection.contains(&s.company))
        .collect()
}
