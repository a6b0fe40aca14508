use serde::Serialize;

use crate::input::TissueMetadata;

/// Median expression of one tissue, joined with its display metadata.
///
/// The joined fields are `None` when no metadata row carried the identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TissueSummary {
    pub tissue_site_detail_id: String,
    pub median: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tissue_site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tissue_site_detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_gene_count: Option<u64>,
    pub metadata_matched: bool,
}

impl TissueSummary {
    pub fn join(tissue_site_detail_id: &str, median: f64, meta: Option<&TissueMetadata>) -> Self {
        match meta {
            Some(m) => Self {
                tissue_site_detail_id: tissue_site_detail_id.to_string(),
                median,
                tissue_site: m.tissue_site.clone(),
                tissue_site_detail: m.tissue_site_detail.clone(),
                color_hex: m.color_hex.clone(),
                e_gene_count: m.e_gene_count,
                metadata_matched: true,
            },
            None => Self {
                tissue_site_detail_id: tissue_site_detail_id.to_string(),
                median,
                tissue_site: None,
                tissue_site_detail: None,
                color_hex: None,
                e_gene_count: None,
                metadata_matched: false,
            },
        }
    }

    /// `#rrggbb` fill, or `None` when the color is absent or not a hex triplet.
    pub fn fill(&self) -> Option<String> {
        let raw = self.color_hex.as_deref()?.trim();
        let hex = raw.strip_prefix('#').unwrap_or(raw);
        let valid = (hex.len() == 6 || hex.len() == 3) && hex.chars().all(|c| c.is_ascii_hexdigit());
        if valid {
            Some(format!("#{}", hex))
        } else {
            None
        }
    }
}
