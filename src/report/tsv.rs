use std::io::{self, Write};

use crate::model::summary::TissueSummary;

const HEADER: [&str; 7] = [
    "rank",
    "tissue_site_detail_id",
    "median",
    "tissue_site",
    "tissue_site_detail",
    "color_hex",
    "egene_count",
];

/// One row per tissue in presentation order; absent metadata is written empty.
pub fn write_summary_tsv<W: Write>(w: &mut W, summaries: &[TissueSummary]) -> io::Result<()> {
    writeln!(w, "{}", HEADER.join("\t"))?;
    for (rank, s) in summaries.iter().enumerate() {
        let row = [
            (rank + 1).to_string(),
            clean(&s.tissue_site_detail_id),
            s.median.to_string(),
            s.tissue_site.as_deref().map(clean).unwrap_or_default(),
            s.tissue_site_detail.as_deref().map(clean).unwrap_or_default(),
            s.color_hex.as_deref().map(clean).unwrap_or_default(),
            s.e_gene_count.map(|c| c.to_string()).unwrap_or_default(),
        ];
        writeln!(w, "{}", row.join("\t"))?;
    }
    Ok(())
}

fn clean(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}
