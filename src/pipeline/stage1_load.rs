use std::path::Path;

use crate::input::{InputBundle, InputError, bundle, parse_expression, parse_tissue_info};

/// Reads both documents concurrently and fails unless both succeed.
pub fn run_stage1(expression_path: &Path, tissues_path: &Path) -> Result<InputBundle, InputError> {
    tracing::info!(
        "loading inputs: expression={}, tissues={}",
        expression_path.display(),
        tissues_path.display()
    );

    let (records, tissues) = std::thread::scope(|s| {
        let expression = s.spawn(|| parse_expression(expression_path));
        let tissues = s.spawn(|| parse_tissue_info(tissues_path));
        (expression.join(), tissues.join())
    });

    let records =
        records.map_err(|_| InputError::Interrupted(expression_path.to_path_buf()))??;
    let tissues = tissues.map_err(|_| InputError::Interrupted(tissues_path.to_path_buf()))??;

    tracing::info!(
        "loaded {} expression records and {} tissue metadata rows",
        records.len(),
        tissues.len()
    );

    let out = bundle(expression_path, tissues_path, records, tissues);
    if let Some(symbol) = &out.gene.gene_symbol {
        tracing::info!("gene symbol: {}", symbol);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
