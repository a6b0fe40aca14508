use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Layout and interaction constants for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Inner plot width, the range of the value scale.
    pub width: f64,
    /// Inner plot height, the range of the band scale.
    pub height: f64,
    pub margin: Margin,
    pub band_padding: f64,
    pub x_ticks: usize,
    pub x_tick_size: f64,
    pub tick_padding: f64,
    pub y_axis_offset: f64,
    pub dim_opacity: f64,
    pub fade_ms: u32,
    pub fallback_fill: &'static str,
}

impl ChartConfig {
    pub fn default_v1() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: Margin {
                top: 30.0,
                right: 30.0,
                bottom: 30.0,
                left: 200.0,
            },
            band_padding: 0.15,
            x_ticks: 6,
            x_tick_size: 6.0,
            tick_padding: 3.0,
            y_axis_offset: 5.0,
            dim_opacity: 0.2,
            fade_ms: 200,
            fallback_fill: "#808080",
        }
    }

    pub fn with_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        if let Some(w) = width {
            self.width = w;
        }
        if let Some(h) = height {
            self.height = h;
        }
        self
    }

    pub fn outer_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    pub fn outer_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }

    pub fn aspect(&self) -> f64 {
        let h = self.outer_height();
        if h <= 0.0 { 1.0 } else { self.outer_width() / h }
    }
}
