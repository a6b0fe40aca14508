use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod expression;
pub mod reader;
pub mod tissues;

pub use expression::{ExpressionRecord, GeneLabel, gene_label, parse_expression};
pub use tissues::{TissueMetadata, parse_tissue_info};

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub expression_path: PathBuf,
    pub tissues_path: PathBuf,
    pub records: Vec<ExpressionRecord>,
    pub tissues: Vec<TissueMetadata>,
    pub gene: GeneLabel,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("loader for {} stopped before finishing", .0.display())]
    Interrupted(PathBuf),
}

pub(crate) fn bundle(
    expression_path: &Path,
    tissues_path: &Path,
    records: Vec<ExpressionRecord>,
    tissues: Vec<TissueMetadata>,
) -> InputBundle {
    let gene = gene_label(&records);
    InputBundle {
        expression_path: expression_path.to_path_buf(),
        tissues_path: tissues_path.to_path_buf(),
        records,
        tissues,
        gene,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
