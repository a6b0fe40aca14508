use serde::Serialize;

use crate::model::config::Margin;
use crate::model::sort::SortMode;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    /// Pixel offset along the axis.
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopAxis {
    pub length: f64,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub ticks: Vec<AxisTick>,
}

/// Category axis; tick marks and the domain line are not drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeftAxis {
    pub offset_x: f64,
    pub tick_padding: f64,
    pub ticks: Vec<AxisTick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    pub detail: String,
    pub median: String,
    pub site: String,
    pub egene_count: String,
}

impl TooltipContent {
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Tissue Site Detail: {}", self.detail),
            format!("Median: {}", self.median),
            format!("Tissue Site: {}", self.site),
            format!("eGene Count: {}", self.egene_count),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    pub tooltip: TooltipContent,
}

/// Everything needed to draw one sorted state of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub sort_mode: SortMode,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub domain_max: f64,
    pub x_axis: TopAxis,
    pub y_axis: LeftAxis,
    pub bars: Vec<Bar>,
}
