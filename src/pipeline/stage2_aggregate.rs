use std::cmp::Ordering;
use std::collections::HashMap;

use crate::input::{ExpressionRecord, TissueMetadata};
use crate::model::summary::TissueSummary;

#[derive(Debug, Clone)]
pub struct Stage2Output {
    /// One summary per distinct tissue identifier, in first-seen order.
    pub summaries: Vec<TissueSummary>,
    pub unmatched: Vec<String>,
}

pub fn run_stage2(records: &[ExpressionRecord], tissues: &[TissueMetadata]) -> Stage2Output {
    let groups = group_by_tissue(records);

    let mut by_id: HashMap<&str, &TissueMetadata> = HashMap::with_capacity(tissues.len());
    for meta in tissues {
        by_id.entry(meta.tissue_site_detail_id.as_str()).or_insert(meta);
    }

    let mut summaries = Vec::with_capacity(groups.len());
    let mut unmatched = Vec::new();
    for (id, mut values) in groups {
        if values.is_empty() {
            tracing::warn!("no numeric values for {}; its median is undefined", id);
        }
        let m = median(&mut values);
        let meta = by_id.get(id).copied();
        if meta.is_none() {
            tracing::warn!(
                "no tissue metadata for {}; summary keeps only id and median",
                id
            );
            unmatched.push(id.to_string());
        }
        summaries.push(TissueSummary::join(id, m, meta));
    }

    tracing::info!(
        "aggregated {} records into {} tissue summaries ({} without metadata)",
        records.len(),
        summaries.len(),
        unmatched.len()
    );

    Stage2Output {
        summaries,
        unmatched,
    }
}

/// Groups `data` values by tissue identifier, keeping first-seen order.
/// Every identifier gets a group, even when none of its values are numeric.
pub fn group_by_tissue(records: &[ExpressionRecord]) -> Vec<(&str, Vec<f64>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();
    for record in records {
        let id = record.tissue_site_detail_id.as_str();
        let slot = match index.get(id) {
            Some(&slot) => slot,
            None => {
                index.insert(id, groups.len());
                groups.push((id, Vec::new()));
                groups.len() - 1
            }
        };
        if let Some(value) = record.data {
            groups[slot].1.push(value);
        }
    }
    groups
}

/// Textbook median; sorts `values` in place. NaN for an empty slice.
pub fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = values.len();
    let mid = n / 2;
    if n % 2 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
