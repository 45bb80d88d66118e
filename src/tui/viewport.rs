//! Geographic viewport: pan/zoom state, cell↔geo conversion, hit testing.

use ratatui::layout::Rect;

use crate::data::record::SiteRecord;

/// Zoom factor bounds. At zoom 1 the full 360°×180° world is visible.
const MIN_ZOOM: f64 = 1.0;
const MAX_ZOOM: f64 = 4096.0;

/// Multiplicative step per zoom keypress.
const ZOOM_STEP: f64 = 1.5;

/// Pan distance per keypress, as a fraction of the visible span.
const PAN_FRACTION: f64 = 0.125;

/// Click hit radius in terminal cells.
const HIT_RADIUS_CELLS: f64 = 2.0;

/// Visible geographic window over the map canvas.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Center longitude (degrees).
    pub center_lon: f64,
    /// Center latitude (degrees).
    pub center_lat: f64,
    /// Zoom factor; visible longitude span is `360° / zoom`.
    pub zoom: f64,
}

impl Viewport {
    /// Creates a viewport, clamping zoom into its valid range.
    pub fn new(center_lon: f64, center_lat: f64, zoom: f64) -> Self {
        Self {
            center_lon,
            center_lat,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Visible longitude span in degrees.
    pub fn lon_span(&self) -> f64 {
        360.0 / self.zoom
    }

    /// Visible latitude span in degrees.
    pub fn lat_span(&self) -> f64 {
        180.0 / self.zoom
    }

    /// Canvas X bounds (longitude).
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lon_span() / 2.0;
        [self.center_lon - half, self.center_lon + half]
    }

    /// Canvas Y bounds (latitude).
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [self.center_lat - half, self.center_lat + half]
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pans the center by the given number of steps in each axis
    /// (positive `dx` = east, positive `dy` = north).
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center_lon = (self.center_lon + dx * self.lon_span() * PAN_FRACTION)
            .clamp(-180.0, 180.0);
        self.center_lat = (self.center_lat + dy * self.lat_span() * PAN_FRACTION)
            .clamp(-90.0, 90.0);
    }

    /// Converts an absolute terminal cell to geographic coordinates, given
    /// the map's inner (borderless) area. Returns `None` outside that area.
    pub fn cell_to_geo(&self, column: u16, row: u16, inner: Rect) -> Option<(f64, f64)> {
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let in_x = column >= inner.x && column < inner.x + inner.width;
        let in_y = row >= inner.y && row < inner.y + inner.height;
        if !in_x || !in_y {
            return None;
        }
        let [x_lo, _] = self.x_bounds();
        let [_, y_hi] = self.y_bounds();
        let fx = (f64::from(column - inner.x) + 0.5) / f64::from(inner.width);
        let fy = (f64::from(row - inner.y) + 0.5) / f64::from(inner.height);
        Some((x_lo + fx * self.lon_span(), y_hi - fy * self.lat_span()))
    }

    /// Cell position of a geographic point within the inner area, in
    /// fractional cell units relative to the area origin.
    fn geo_to_cell(&self, lon: f64, lat: f64, inner: Rect) -> (f64, f64) {
        let [x_lo, _] = self.x_bounds();
        let [_, y_hi] = self.y_bounds();
        let cx = (lon - x_lo) / self.lon_span() * f64::from(inner.width);
        let cy = (y_hi - lat) / self.lat_span() * f64::from(inner.height);
        (cx, cy)
    }

    /// Finds the visible site nearest to a clicked cell, within the hit
    /// radius. `visible` holds indices into `sites`; the returned index is
    /// into `sites` as well.
    pub fn hit_test(
        &self,
        sites: &[SiteRecord],
        visible: &[usize],
        column: u16,
        row: u16,
        inner: Rect,
    ) -> Option<usize> {
        self.cell_to_geo(column, row, inner)?;
        let click_x = f64::from(column - inner.x) + 0.5;
        let click_y = f64::from(row - inner.y) + 0.5;

        let mut best: Option<(usize, f64)> = None;
        for &i in visible {
            let site = &sites[i];
            let (sx, sy) = self.geo_to_cell(site.lon, site.lat, inner);
            let d2 = (sx - click_x).powi(2) + (sy - click_y).powi(2);
            if d2 <= HIT_RADIUS_CELLS * HIT_RADIUS_CELLS
                && best.is_none_or(|(_, bd2)| d2 < bd2)
            {
                best = Some((i, d2));
            }
        }
        best.map(|(i, _)| i)
    }
}
