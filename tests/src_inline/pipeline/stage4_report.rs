use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::input::{ExpressionRecord, TissueMetadata, bundle};
use crate::model::config::ChartConfig;
use crate::pipeline::stage2_aggregate::run_stage2;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_tissuebars_stage4_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn meta(id: &str, color: &str) -> TissueMetadata {
    TissueMetadata {
        tissue_site_detail_id: id.to_string(),
        tissue_site: Some("Site".to_string()),
        tissue_site_detail: Some(format!("Detail {}", id)),
        color_hex: Some(color.to_string()),
        e_gene_count: Some(7),
    }
}

fn sample_bundle() -> InputBundle {
    let mut records = vec![
        ExpressionRecord::new("B", 2.0),
        ExpressionRecord::new("A", 1.0),
        ExpressionRecord::new("A", 3.0),
        ExpressionRecord::new("C", 9.0),
    ];
    records[0].gene_symbol = Some("PTEN".to_string());
    records[0].unit = Some("TPM".to_string());
    let tissues = vec![meta("A", "ff0000"), meta("B", "00ff00")];
    bundle(
        &PathBuf::from("expr.json"),
        &PathBuf::from("tissues.json"),
        records,
        tissues,
    )
}

fn order(scene: &Scene) -> Vec<&str> {
    scene.bars.iter().map(|b| b.id.as_str()).collect()
}

/// B and A tie at 2.0; discovery order puts B first.
fn tied_summaries() -> Vec<TissueSummary> {
    let b = sample_bundle();
    run_stage2(&b.records, &b.tissues).summaries
}

#[test]
fn test_collect_states_replays_toggles() {
    let app = ChartApp::init(tied_summaries(), "median", ChartConfig::default_v1());

    let states = collect_states(app);
    assert_eq!(order(&states.initial), vec!["C", "B", "A"]);
    assert_eq!(order(&states.alphabet), vec!["A", "B", "C"]);
    // After passing through alphabetical order the tie resolves as A, B.
    assert_eq!(order(&states.median), vec!["C", "A", "B"]);
    assert_eq!(states.initial_order[0].tissue_site_detail_id, "C");
}

#[test]
fn test_clicking_checked_median_keeps_initial_order() {
    let config = ChartConfig::default_v1();
    let states = collect_states(ChartApp::init(tied_summaries(), "median", config.clone()));
    let mut app = ChartApp::init(tied_summaries(), "median", config);

    let view = PageView::new(SortMode::Median).click("median");
    let reapplied = app.select_sort("median");
    assert_eq!(order(states.scene_for(view.layer())), vec!["C", "B", "A"]);
    assert_eq!(order(states.scene_for(view.layer())), order(reapplied));
}

#[test]
fn test_page_layers_match_in_place_resorting() {
    let sequences: &[&[&str]] = &[
        &[],
        &["median"],
        &["alphabet"],
        &["alphabet", "median"],
        &["alphabet", "median", "median"],
        &["median", "alphabet", "alphabet", "median"],
        &["alphabet", "alphabet", "median", "alphabet", "median"],
    ];
    let config = ChartConfig::default_v1();
    for initial in [ALPHABET_TAG, MEDIAN_TAG] {
        let states = collect_states(ChartApp::init(tied_summaries(), initial, config.clone()));
        for clicks in sequences {
            let mut app = ChartApp::init(tied_summaries(), initial, config.clone());
            let mut view = PageView::new(SortMode::from_tag(initial));
            for tag in clicks.iter() {
                app.select_sort(tag);
                view = view.click(tag);
            }
            assert_eq!(
                order(states.scene_for(view.layer())),
                order(app.scene()),
                "initial {} clicks {:?}",
                initial,
                clicks
            );
        }
    }
}

#[test]
fn test_write_reports_creates_all_outputs() {
    let dir = make_temp_dir();
    let b = sample_bundle();
    let agg = run_stage2(&b.records, &b.tissues);
    let config = ChartConfig::default_v1();
    let states = collect_states(ChartApp::init(
        agg.summaries.clone(),
        "alphabet",
        config.clone(),
    ));
    let input = Stage4Input {
        bundle: &b,
        aggregate: &agg,
        states: &states,
        config: &config,
        tool_name: "kira-tissuebars".to_string(),
        tool_version: "0.0.0".to_string(),
        git_hash: None,
    };
    write_reports(&input, &dir).unwrap();

    let html = fs::read_to_string(dir.join("chart.html")).unwrap();
    assert!(html.contains("id=\"alphabet\" autocomplete=\"off\" checked"));
    assert!(html.contains("data-state=\"initial\""));
    assert!(html.contains("data-state=\"median\" data-sort=\"median\" style=\"display:none\""));
    assert!(html.contains("data-state=\"initial\" data-sort=\"alphabet\">"));
    assert!(html.contains("var shown = 'alphabet';"));
    assert!(!html.contains("<title>Tissue Site Detail"));
    assert_eq!(html.matches("<rect class=\"bar\"").count(), 9);
    assert!(html.contains("PTEN median expression by tissue (TPM)"));

    let svg = fs::read_to_string(dir.join("chart.svg")).unwrap();
    assert_eq!(svg.matches("<rect class=\"bar\"").count(), 3);
    assert!(svg.contains("fill=\"#808080\""));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("summary.json")).unwrap()).unwrap();
    assert_eq!(json["sort_mode"], "alphabet");
    assert_eq!(json["n_tissues"], 3);
    assert_eq!(json["unmatched_tissues"][0], "C");
    assert_eq!(json["tissues"][0]["tissueSiteDetailId"], "A");
    assert_eq!(json["tissues"][0]["median"], 2.0);
    assert_eq!(json["input"]["gene_symbol"], "PTEN");

    let tsv = fs::read_to_string(dir.join("summary.tsv")).unwrap();
    let lines = tsv.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("rank\ttissue_site_detail_id\tmedian"));
    assert_eq!(lines[3], "3\tC\t9\t\t\t\t");
}

#[test]
fn test_chart_title_without_gene() {
    assert_eq!(
        chart_title(&GeneLabel::default()),
        "Median gene expression by tissue"
    );
}
