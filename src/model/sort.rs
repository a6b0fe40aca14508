use std::cmp::Ordering;

use serde::Serialize;

use crate::model::summary::TissueSummary;

pub const ALPHABET_TAG: &str = "alphabet";
pub const MEDIAN_TAG: &str = "median";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Alphabet,
    Median,
}

impl SortMode {
    /// `alphabet` selects identifier order; every other tag sorts by median.
    pub fn from_tag(tag: &str) -> Self {
        if tag == ALPHABET_TAG {
            SortMode::Alphabet
        } else {
            SortMode::Median
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            SortMode::Alphabet => ALPHABET_TAG,
            SortMode::Median => MEDIAN_TAG,
        }
    }

    pub fn other(self) -> Self {
        match self {
            SortMode::Alphabet => SortMode::Median,
            SortMode::Median => SortMode::Alphabet,
        }
    }
}

/// Stable in-place sort; ties keep their current relative order.
pub fn sort_summaries(summaries: &mut [TissueSummary], mode: SortMode) {
    match mode {
        SortMode::Alphabet => {
            summaries.sort_by(|a, b| a.tissue_site_detail_id.cmp(&b.tissue_site_detail_id))
        }
        SortMode::Median => summaries.sort_by(|a, b| {
            b.median
                .partial_cmp(&a.median)
                .unwrap_or(Ordering::Equal)
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/sort.rs"]
mod tests;
