use crate::input::TissueMetadata;

use super::*;

fn matched(id: &str, median: f64, color: &str) -> TissueSummary {
    let meta = TissueMetadata {
        tissue_site_detail_id: id.to_string(),
        tissue_site: Some("Brain".to_string()),
        tissue_site_detail: Some(format!("Brain - {}", id)),
        color_hex: Some(color.to_string()),
        e_gene_count: Some(1234),
    };
    TissueSummary::join(id, median, Some(&meta))
}

fn config() -> ChartConfig {
    ChartConfig::default_v1()
}

#[test]
fn test_domain_max_is_largest_median() {
    let sorted = vec![matched("A", 20.0, "ff0000"), matched("B", 50.0, "00ff00")];
    let scene = build_scene(&sorted, SortMode::Alphabet, &config());
    assert_eq!(scene.domain_max, 50.0);
    assert_eq!(scene.bars[1].width, 800.0);
    assert_eq!(scene.bars[0].width, 320.0);
    assert_eq!(scene.bars[0].x, 0.0);
}

#[test]
fn test_bars_follow_sorted_order() {
    let sorted = vec![matched("B", 5.0, "00ff00"), matched("A", 1.0, "ff0000")];
    let scene = build_scene(&sorted, SortMode::Median, &config());
    assert_eq!(scene.bars[0].id, "B");
    assert_eq!(scene.bars[1].id, "A");
    assert!(scene.bars[0].y < scene.bars[1].y);
    assert_eq!(scene.y_axis.ticks[0].label, "B");
    assert_eq!(scene.y_axis.offset_x, -5.0);
    assert_eq!(scene.bars[0].fill, "#00ff00");
}

#[test]
fn test_top_axis_ticks() {
    let sorted = vec![matched("A", 50.0, "ff0000")];
    let scene = build_scene(&sorted, SortMode::Median, &config());
    let labels = scene
        .x_axis
        .ticks
        .iter()
        .map(|t| t.label.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["0", "10", "20", "30", "40", "50"]);
    assert_eq!(scene.x_axis.ticks[5].offset, 800.0);
}

#[test]
fn test_empty_set_renders_no_bars() {
    let scene = build_scene(&[], SortMode::Median, &config());
    assert!(scene.bars.is_empty());
    assert!(scene.y_axis.ticks.is_empty());
    assert_eq!(scene.domain_max, 0.0);
    assert_eq!(scene.x_axis.ticks.len(), 1);
}

#[test]
fn test_all_zero_medians_have_zero_width() {
    let sorted = vec![matched("A", 0.0, "ff0000"), matched("B", 0.0, "00ff00")];
    let scene = build_scene(&sorted, SortMode::Median, &config());
    assert!(scene.bars.iter().all(|b| b.width == 0.0));
    assert!(scene.bars.iter().all(|b| b.height > 0.0));
}

#[test]
fn test_missing_metadata_uses_fallbacks() {
    let sorted = vec![TissueSummary::join("Unknown_Tissue", 3.0, None)];
    let scene = build_scene(&sorted, SortMode::Median, &config());
    let bar = &scene.bars[0];
    assert_eq!(bar.fill, "#808080");
    assert_eq!(bar.tooltip.detail, "Unknown_Tissue");
    assert_eq!(bar.tooltip.site, "n/a");
    assert_eq!(bar.tooltip.egene_count, "n/a");
}

#[test]
fn test_invalid_color_uses_fallback() {
    let sorted = vec![matched("A", 1.0, "not-a-color\"/><script>")];
    let scene = build_scene(&sorted, SortMode::Median, &config());
    assert_eq!(scene.bars[0].fill, "#808080");
}

#[test]
fn test_tooltip_content() {
    let t = tooltip_for(&matched("Brain_Cortex", 12.345, "eeee00"));
    assert_eq!(
        t.lines(),
        [
            "Tissue Site Detail: Brain - Brain_Cortex".to_string(),
            "Median: 12.3".to_string(),
            "Tissue Site: Brain".to_string(),
            "eGene Count: 1234".to_string(),
        ]
    );
}
