use serde::Serialize;

use crate::model::sort::SortMode;
use crate::model::summary::TissueSummary;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
    pub git_hash: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputMeta {
    pub expression: String,
    pub tissues: String,
    pub n_records: usize,
    pub n_tissue_rows: usize,
    pub gene_symbol: Option<String>,
    pub gencode_id: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData<'a> {
    pub tool: ToolMeta,
    pub input: InputMeta,
    pub sort_mode: SortMode,
    pub domain_max: f64,
    pub n_tissues: usize,
    pub unmatched_tissues: &'a [String],
    pub tissues: &'a [TissueSummary],
}

pub fn render_summary_json(data: &SummaryData<'_>) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}
