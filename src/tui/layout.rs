//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use super::runtime::App;

/// Screen regions of the viewer.
pub struct Areas {
    /// Header bar.
    pub header: Rect,
    /// Map canvas (including its border).
    pub map: Rect,
    /// Year slider gauge.
    pub slider: Rect,
    /// Detail / status panel.
    pub detail: Rect,
    /// Key-hint footer.
    pub footer: Rect,
}

impl Areas {
    /// Splits the full frame area into the viewer regions.
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Min(10),   // map
                Constraint::Length(3), // year slider
                Constraint::Length(6), // detail panel
                Constraint::Length(1), // footer
            ])
            .split(area);
        Self {
            header: chunks[0],
            map: chunks[1],
            slider: chunks[2],
            detail: chunks[3],
            footer: chunks[4],
        }
    }

    /// Borderless interior of the map area, used for click hit testing.
    pub fn map_inner(&self) -> Rect {
        self.map.inner(Margin::new(1, 1))
    }
}

/// Renders the full viewer frame.
pub fn render(frame: &mut Frame, app: &App) {
    let areas = Areas::compute(frame.area());
    render_header(frame, app, areas.header);
    render_map(frame, app, areas.map);
    render_slider(frame, app, areas.slider);
    render_detail(frame, app, areas.detail);
    render_footer(frame, app, areas.footer);
}

/// Header bar: preset name, visible/total counts, zoom.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_indices().len();
    let header = Line::from(vec![
        Span::styled(
            " WINDFARM-VIEW ",
            Style::default()
                .fg(app.theme.header_fg)
                .bg(app.theme.header_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ {visible}/{} sites │ zoom ×{:.1} ",
            app.sites.len(),
            app.viewport.zoom,
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Dark world base map with the visible sites as points.
fn render_map(frame: &mut Frame, app: &App, area: Rect) {
    let visible_coords: Vec<(f64, f64)> = app
        .visible_indices()
        .into_iter()
        .filter(|&i| app.selected != Some(i))
        .map(|i| (app.sites[i].lon, app.sites[i].lat))
        .collect();

    let selected = app.selected.map(|i| &app.sites[i]);
    let selected_coords: Vec<(f64, f64)> =
        selected.iter().map(|s| (s.lon, s.lat)).collect();

    let canvas = Canvas::default()
        .block(Block::default().title(" Wind Farms ").borders(Borders::ALL))
        .background_color(app.theme.background)
        .x_bounds(app.viewport.x_bounds())
        .y_bounds(app.viewport.y_bounds())
        .paint(|ctx| {
            ctx.draw(&Map {
                color: app.theme.base_map,
                resolution: MapResolution::High,
            });
            ctx.layer();
            ctx.draw(&Points {
                coords: &visible_coords,
                color: app.theme.point,
            });
            if let Some(site) = selected {
                ctx.draw(&Points {
                    coords: &selected_coords,
                    color: app.theme.point_selected,
                });
                ctx.print(
                    site.lon,
                    site.lat,
                    Line::styled(
                        format!(" {} ", site.display_name()),
                        Style::default()
                            .fg(app.theme.point_selected)
                            .add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}

/// Year slider gauge with the current threshold label.
fn render_slider(frame: &mut Frame, app: &App, area: Rect) {
    let ratio = match (app.slider_bounds(), app.filter.threshold) {
        (Some((min, max)), Some(y)) if max > min => {
            f64::from(y - min) / f64::from(max - min)
        }
        _ => 1.0, // no filter: slider rests at its upper end
    };

    let title = match app.slider_bounds() {
        Some((min, max)) => format!(" Commissioned by ({min}–{max}) "),
        None => " Commissioned by ".to_string(),
    };

    let gauge = Gauge::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .gauge_style(Style::default().fg(app.theme.slider))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(app.year_label());
    frame.render_widget(gauge, area);
}

/// Detail panel: selected-site summary, or collection status.
fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let (title, lines) = match app.selected.map(|i| &app.sites[i]) {
        Some(site) => (
            " Site ",
            vec![
                Line::from(Span::styled(
                    format!("  {}", site.display_name()),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("  Capacity: {}", site.display_capacity())),
                Line::from(format!("  Operational Since: {}", site.display_year())),
                Line::from(format!("  Position: {:.3}, {:.3}", site.lon, site.lat)),
            ],
        ),
        None => {
            let unknown = app
                .sites
                .iter()
                .filter(|r| r.operational_year.is_none())
                .count();
            (
                " Status ",
                vec![
                    Line::from(format!(
                        "  {} sites loaded, {} without a known year",
                        app.sites.len(),
                        unknown,
                    )),
                    Line::from(format!(
                        "  {} features skipped (no point geometry)",
                        app.skipped_geometry,
                    )),
                    Line::from("  Click a point or press Tab to inspect a site"),
                ],
            )
        }
    };

    let block = Block::default().title(title).borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Click/Tab:Select  [/]:Year  PgUp/PgDn:±10  0:All  Arrows:Pan  +/-:Zoom  1/2/3:View  r:Reset",
        Style::default().fg(app.theme.footer_fg),
    )));
    frame.render_widget(footer, area);
}
