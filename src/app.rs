//! Chart state and the translation of sort clicks into state updates.

use crate::model::config::ChartConfig;
use crate::model::scene::Scene;
use crate::model::sort::{SortMode, sort_summaries};
use crate::model::summary::TissueSummary;
use crate::pipeline::stage3_scene::build_scene;

/// Layer name of the scene drawn on load.
pub const INITIAL_STATE: &str = "initial";

#[derive(Debug, Clone)]
pub struct ChartApp {
    summaries: Vec<TissueSummary>,
    config: ChartConfig,
    sort_mode: SortMode,
    scene: Scene,
}

impl ChartApp {
    pub fn init(summaries: Vec<TissueSummary>, default_tag: &str, config: ChartConfig) -> Self {
        let sort_mode = SortMode::from_tag(default_tag);
        let mut summaries = summaries;
        sort_summaries(&mut summaries, sort_mode);
        let scene = build_scene(&summaries, sort_mode, &config);
        Self {
            summaries,
            config,
            sort_mode,
            scene,
        }
    }

    /// Handles a click on the sort option with id `tag`.
    pub fn select_sort(&mut self, tag: &str) -> &Scene {
        let mode = SortMode::from_tag(tag);
        // Reorders the cached set; the summaries themselves are untouched.
        sort_summaries(&mut self.summaries, mode);
        self.sort_mode = mode;
        self.scene = build_scene(&self.summaries, mode, &self.config);
        &self.scene
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn summaries(&self) -> &[TissueSummary] {
        &self.summaries
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }
}

/// Which embedded scene the page shows after a sequence of radio clicks.
///
/// The initial scene stays up until the other option is clicked. A click on
/// the option already shown changes nothing, because re-sorting by the current
/// mode keeps the current order. After the first switch every state is one of
/// the per-mode layers: alphabetical order is total, so the median order that
/// follows it is always the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    shown: SortMode,
    switched: bool,
}

impl PageView {
    pub fn new(initial: SortMode) -> Self {
        Self {
            shown: initial,
            switched: false,
        }
    }

    pub fn click(self, tag: &str) -> Self {
        let mode = SortMode::from_tag(tag);
        if mode == self.shown {
            return self;
        }
        Self {
            shown: mode,
            switched: true,
        }
    }

    pub fn shown(self) -> SortMode {
        self.shown
    }

    pub fn layer(self) -> &'static str {
        if self.switched {
            self.shown.tag()
        } else {
            INITIAL_STATE
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/app.rs"]
mod tests;
