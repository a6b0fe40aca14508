use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::app::{ChartApp, INITIAL_STATE, PageView};
use crate::input::{GeneLabel, InputBundle};
use crate::model::scene::Scene;
use crate::model::sort::{ALPHABET_TAG, MEDIAN_TAG, SortMode};
use crate::model::summary::TissueSummary;
use crate::pipeline::stage2_aggregate::Stage2Output;
use crate::report::html::{PageInput, render_page};
use crate::report::json::{InputMeta, SummaryData, ToolMeta, render_summary_json};
use crate::report::svg::{SceneLayer, render_static_svg};
use crate::report::tsv::write_summary_tsv;

/// Scenes the page can show: the initial one, then one per sort option as it
/// looks after the user switches to it.
#[derive(Debug, Clone)]
pub struct ChartStates {
    pub initial: Scene,
    pub initial_order: Vec<TissueSummary>,
    pub alphabet: Scene,
    pub median: Scene,
}

impl ChartStates {
    /// Scene for a `PageView::layer` name.
    pub fn scene_for(&self, layer: &str) -> &Scene {
        match layer {
            INITIAL_STATE => &self.initial,
            ALPHABET_TAG => &self.alphabet,
            _ => &self.median,
        }
    }
}

/// Replays the first switch away from the initial option and the switch back.
/// Re-sorting is stable against the current order, so the median view after a
/// toggle may break ties differently from the initial one.
pub fn collect_states(mut app: ChartApp) -> ChartStates {
    let initial = app.scene().clone();
    let initial_order = app.summaries().to_vec();
    let start = PageView::new(app.sort_mode());
    let away = start.click(start.shown().other().tag());
    let first = app.select_sort(away.shown().tag()).clone();
    let back = away.click(start.shown().tag());
    let second = app.select_sort(back.shown().tag()).clone();
    let (alphabet, median) = match away.shown() {
        SortMode::Alphabet => (first, second),
        SortMode::Median => (second, first),
    };
    ChartStates {
        initial,
        initial_order,
        alphabet,
        median,
    }
}

#[derive(Debug, Clone)]
pub struct Stage4Input<'a> {
    pub bundle: &'a InputBundle,
    pub aggregate: &'a Stage2Output,
    pub states: &'a ChartStates,
    pub config: &'a crate::model::config::ChartConfig,
    pub tool_name: String,
    pub tool_version: String,
    pub git_hash: Option<String>,
}

pub fn write_reports(input: &Stage4Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let states = input.states;
    let title = chart_title(&input.bundle.gene);
    let shown = PageView::new(states.initial.sort_mode).layer();

    let page = PageInput {
        title: title.clone(),
        initial_mode: states.initial.sort_mode,
        layers: [INITIAL_STATE, ALPHABET_TAG, MEDIAN_TAG]
            .into_iter()
            .map(|state| SceneLayer {
                state,
                scene: states.scene_for(state),
                visible: state == shown,
            })
            .collect(),
        config: input.config,
    };
    write_text(&out_dir.join("chart.html"), &render_page(&page))?;

    let svg = render_static_svg(&states.initial, input.config, Some(&title));
    write_text(&out_dir.join("chart.svg"), &svg)?;

    let summary = SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
            git_hash: input.git_hash.clone(),
        },
        input: InputMeta {
            expression: input.bundle.expression_path.display().to_string(),
            tissues: input.bundle.tissues_path.display().to_string(),
            n_records: input.bundle.records.len(),
            n_tissue_rows: input.bundle.tissues.len(),
            gene_symbol: input.bundle.gene.gene_symbol.clone(),
            gencode_id: input.bundle.gene.gencode_id.clone(),
            unit: input.bundle.gene.unit.clone(),
        },
        sort_mode: states.initial.sort_mode,
        domain_max: states.initial.domain_max,
        n_tissues: states.initial_order.len(),
        unmatched_tissues: &input.aggregate.unmatched,
        tissues: &states.initial_order,
    };
    write_text(&out_dir.join("summary.json"), &render_summary_json(&summary)?)?;

    let mut w = BufWriter::new(File::create(out_dir.join("summary.tsv"))?);
    write_summary_tsv(&mut w, &states.initial_order)?;
    w.flush()?;

    tracing::info!(
        "wrote chart.html, chart.svg, summary.json and summary.tsv to {}",
        out_dir.display()
    );
    Ok(())
}

pub fn chart_title(gene: &GeneLabel) -> String {
    let mut title = match &gene.gene_symbol {
        Some(symbol) => format!("{} median expression by tissue", symbol),
        None => "Median gene expression by tissue".to_string(),
    };
    if let Some(unit) = &gene.unit {
        title.push_str(&format!(" ({})", unit));
    }
    title
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
