use crate::model::config::ChartConfig;
use crate::model::scale::{BandScale, LinearScale};
use crate::model::scene::{AxisTick, Bar, LeftAxis, Scene, TooltipContent, TopAxis};
use crate::model::sort::SortMode;
use crate::model::summary::TissueSummary;
use crate::report::{format_median, format_tick};

const NOT_AVAILABLE: &str = "n/a";

/// Lays out summaries, already in presentation order, as one chart scene.
pub fn build_scene(sorted: &[TissueSummary], mode: SortMode, config: &ChartConfig) -> Scene {
    let domain_max = max_median(sorted);
    let x = LinearScale::new((0.0, domain_max), (0.0, config.width));

    let step = x.tick_step(config.x_ticks);
    let x_ticks = x
        .ticks(config.x_ticks)
        .into_iter()
        .map(|v| AxisTick {
            offset: x.apply(v),
            label: format_tick(v, step),
        })
        .collect();

    let keys = sorted
        .iter()
        .map(|s| s.tissue_site_detail_id.clone())
        .collect::<Vec<_>>();
    let y = BandScale::new(keys, (0.0, config.height), config.band_padding);
    let half_band = y.bandwidth() / 2.0;

    let mut y_ticks = Vec::with_capacity(sorted.len());
    let mut bars = Vec::with_capacity(sorted.len());
    for summary in sorted {
        let id = summary.tissue_site_detail_id.as_str();
        let top = y.position(id).unwrap_or(0.0);
        y_ticks.push(AxisTick {
            offset: top + half_band,
            label: id.to_string(),
        });
        let x0 = x.apply(0.0);
        bars.push(Bar {
            id: id.to_string(),
            x: x0,
            y: top,
            width: (x.apply(summary.median) - x0).max(0.0),
            height: y.bandwidth(),
            fill: summary
                .fill()
                .unwrap_or_else(|| config.fallback_fill.to_string()),
            tooltip: tooltip_for(summary),
        });
    }

    Scene {
        sort_mode: mode,
        width: config.width,
        height: config.height,
        margin: config.margin,
        domain_max,
        x_axis: TopAxis {
            length: config.width,
            tick_size: config.x_tick_size,
            tick_padding: config.tick_padding,
            ticks: x_ticks,
        },
        y_axis: LeftAxis {
            offset_x: -config.y_axis_offset,
            tick_padding: config.tick_padding,
            ticks: y_ticks,
        },
        bars,
    }
}

/// Upper bound of the value domain; 0 for an empty set.
pub fn max_median(summaries: &[TissueSummary]) -> f64 {
    summaries
        .iter()
        .map(|s| s.median)
        .filter(|m| !m.is_nan())
        .fold(None, |acc: Option<f64>, m| Some(acc.map_or(m, |a| a.max(m))))
        .unwrap_or(0.0)
}

pub fn tooltip_for(summary: &TissueSummary) -> TooltipContent {
    TooltipContent {
        detail: summary
            .tissue_site_detail
            .clone()
            .unwrap_or_else(|| summary.tissue_site_detail_id.clone()),
        median: format_median(summary.median),
        site: summary
            .tissue_site
            .clone()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        egene_count: summary
            .e_gene_count
            .map(|c| c.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_scene.rs"]
mod tests;
