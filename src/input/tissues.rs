use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::InputError;
use crate::input::reader::read_json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TissueMetadata {
    pub tissue_site_detail_id: String,
    #[serde(default)]
    pub tissue_site: Option<String>,
    #[serde(default)]
    pub tissue_site_detail: Option<String>,
    #[serde(default)]
    pub color_hex: Option<String>,
    #[serde(default)]
    pub e_gene_count: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TissueInfoDoc {
    pub tissue_info: Vec<TissueMetadata>,
}

pub fn parse_tissue_info(path: &Path) -> Result<Vec<TissueMetadata>, InputError> {
    let doc: TissueInfoDoc = read_json(path)?;
    Ok(doc.tissue_info)
}
