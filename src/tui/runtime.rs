//! Viewer application state.
//!
//! All UI events resolve to method calls on [`App`], so the whole control
//! surface is testable without a terminal.

use crate::config::ViewerConfig;
use crate::data::filter::YearFilter;
use crate::data::record::SiteRecord;
use crate::tui::style::Theme;
use crate::tui::viewport::Viewport;

/// Year delta for a coarse slider step (PageUp/PageDown).
const COARSE_YEAR_STEP: i32 = 10;

/// Viewer application state: the annotated record collection, the current
/// threshold, the selection, and the camera.
pub struct App {
    /// Startup configuration (kept for restart).
    config: ViewerConfig,
    /// Annotated site records; replaced wholesale on reload, never edited.
    pub sites: Vec<SiteRecord>,
    /// Features dropped at load for lack of point geometry.
    pub skipped_geometry: usize,
    /// Current year filter threshold.
    pub filter: YearFilter,
    /// Selected site index into `sites`, if any.
    pub selected: Option<usize>,
    /// Current map viewport.
    pub viewport: Viewport,
    /// Active color theme.
    pub theme: Theme,
    /// Name of the active viewport preset.
    pub preset_name: String,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app from a validated config and an annotated collection.
    pub fn new(config: ViewerConfig, sites: Vec<SiteRecord>, skipped_geometry: usize) -> Self {
        let m = &config.map;
        let viewport = Viewport::new(m.center_lon, m.center_lat, m.zoom);
        let theme = Theme::from_name(&m.theme);
        Self {
            config,
            sites,
            skipped_geometry,
            filter: YearFilter::default(),
            selected: None,
            viewport,
            theme,
            preset_name: "uk".to_string(),
            quit: false,
        }
    }

    /// Slider bounds: configured values when set, otherwise the year range
    /// present in the data. `None` when no bound is available at all.
    pub fn slider_bounds(&self) -> Option<(i32, i32)> {
        let data_min = self.sites.iter().filter_map(|r| r.operational_year).min();
        let data_max = self.sites.iter().filter_map(|r| r.operational_year).max();
        let min = if self.config.slider.min_year != 0 {
            Some(self.config.slider.min_year)
        } else {
            data_min
        };
        let max = if self.config.slider.max_year != 0 {
            Some(self.config.slider.max_year)
        } else {
            data_max
        };
        min.zip(max)
    }

    /// Moves the slider by `delta` years, re-applying the filter.
    ///
    /// The first interaction initializes the threshold to the slider
    /// maximum (every known-year site visible), matching a slider control
    /// resting at its upper end. The selection is dropped if the selected
    /// site is filtered out.
    pub fn adjust_year(&mut self, delta: i32) {
        let Some((min, max)) = self.slider_bounds() else {
            return;
        };
        let next = match self.filter.threshold {
            None => max,
            Some(y) => y.saturating_add(delta),
        };
        self.filter.threshold = Some(next.clamp(min, max));
        self.prune_selection();
    }

    /// Moves the slider by a coarse step.
    pub fn adjust_year_coarse(&mut self, direction: i32) {
        self.adjust_year(direction * COARSE_YEAR_STEP);
    }

    /// Removes the filter entirely: every site visible again, including
    /// unknown-year records.
    pub fn clear_filter(&mut self) {
        self.filter.threshold = None;
    }

    /// Indices of sites visible under the current filter.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.filter.visible_indices(&self.sites)
    }

    /// Selects a site by index (from a map click hit test).
    pub fn select(&mut self, index: usize) {
        if index < self.sites.len() {
            self.selected = Some(index);
        }
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Cycles the selection forward through the visible sites.
    pub fn select_next(&mut self) {
        self.cycle_selection(true);
    }

    /// Cycles the selection backward through the visible sites.
    pub fn select_prev(&mut self) {
        self.cycle_selection(false);
    }

    fn cycle_selection(&mut self, forward: bool) {
        let visible = self.visible_indices();
        if visible.is_empty() {
            self.selected = None;
            return;
        }
        let pos = self
            .selected
            .and_then(|s| visible.iter().position(|&i| i == s));
        let next_pos = match (pos, forward) {
            (None, _) => 0,
            (Some(p), true) => (p + 1) % visible.len(),
            (Some(p), false) => (p + visible.len() - 1) % visible.len(),
        };
        self.selected = Some(visible[next_pos]);
    }

    /// Drops the selection when the selected site is no longer visible.
    fn prune_selection(&mut self) {
        if let Some(i) = self.selected {
            if !self.filter.includes(&self.sites[i]) {
                self.selected = None;
            }
        }
    }

    /// Switches to a named viewport preset. Camera and selection reset; the
    /// record collection and the filter are untouched.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(preset) = ViewerConfig::from_preset(name) else {
            return;
        };
        let m = &preset.map;
        self.viewport = Viewport::new(m.center_lon, m.center_lat, m.zoom);
        self.selected = None;
        self.preset_name = name.to_string();
    }

    /// Restores the startup camera, clears the filter and selection.
    pub fn restart(&mut self) {
        let m = &self.config.map;
        self.viewport = Viewport::new(m.center_lon, m.center_lat, m.zoom);
        self.filter = YearFilter::default();
        self.selected = None;
    }

    /// Label text for the year slider.
    pub fn year_label(&self) -> String {
        match self.filter.threshold {
            None => "Year: all (no filter)".to_string(),
            Some(y) => format!("Year: ≤ {y}"),
        }
    }
}
