use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::InputError;
use crate::input::reader::read_json;

/// One raw measurement. Many records share a tissue identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionRecord {
    pub tissue_site_detail_id: String,
    /// `None` when the source value is null or not numeric; such records are
    /// skipped by the median.
    #[serde(default, deserialize_with = "lenient_number")]
    pub data: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gencode_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

#[cfg(test)]
impl ExpressionRecord {
    pub fn new(tissue_site_detail_id: &str, data: f64) -> Self {
        Self {
            tissue_site_detail_id: tissue_site_detail_id.to_string(),
            data: Some(data),
            gene_symbol: None,
            gencode_id: None,
            unit: None,
        }
    }
}

/// Accepts JSON numbers and numeric strings; anything else reads as missing.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => {
            s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionDoc {
    pub gene_expression: Vec<ExpressionRecord>,
}

/// Gene-level labels carried alongside the records, if the source provides them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneLabel {
    pub gene_symbol: Option<String>,
    pub gencode_id: Option<String>,
    pub unit: Option<String>,
}

pub fn parse_expression(path: &Path) -> Result<Vec<ExpressionRecord>, InputError> {
    let doc: ExpressionDoc = read_json(path)?;
    Ok(doc.gene_expression)
}

pub fn gene_label(records: &[ExpressionRecord]) -> GeneLabel {
    fn first_non_empty<'a>(
        records: &'a [ExpressionRecord],
        field: impl Fn(&'a ExpressionRecord) -> Option<&'a String>,
    ) -> Option<String> {
        records
            .iter()
            .filter_map(field)
            .find(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
    }

    GeneLabel {
        gene_symbol: first_non_empty(records, |r| r.gene_symbol.as_ref()),
        gencode_id: first_non_empty(records, |r| r.gencode_id.as_ref()),
        unit: first_non_empty(records, |r| r.unit.as_ref()),
    }
}
