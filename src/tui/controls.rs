//! Keyboard and mouse input handling for the viewer.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        // Esc dismisses the detail overlay first, quits when none is open
        KeyCode::Esc => {
            if app.selected.is_some() {
                app.clear_selection();
            } else {
                app.quit = true;
            }
        }
        KeyCode::Char('[') => app.adjust_year(-1),
        KeyCode::Char(']') => app.adjust_year(1),
        KeyCode::PageDown => app.adjust_year_coarse(-1),
        KeyCode::PageUp => app.adjust_year_coarse(1),
        KeyCode::Char('0') => app.clear_filter(),
        KeyCode::Tab => app.select_next(),
        KeyCode::BackTab => app.select_prev(),
        KeyCode::Left => app.viewport.pan(-1.0, 0.0),
        KeyCode::Right => app.viewport.pan(1.0, 0.0),
        KeyCode::Up => app.viewport.pan(0.0, 1.0),
        KeyCode::Down => app.viewport.pan(0.0, -1.0),
        KeyCode::Char('+' | '=') => app.viewport.zoom_in(),
        KeyCode::Char('-') => app.viewport.zoom_out(),
        KeyCode::Char('1') => app.switch_preset("uk"),
        KeyCode::Char('2') => app.switch_preset("europe"),
        KeyCode::Char('3') => app.switch_preset("global"),
        KeyCode::Char('r') => app.restart(),
        _ => {}
    }
}

/// Maps a mouse event to an application action.
///
/// A left click inside the map area hit-tests the visible sites and selects
/// the nearest one; a click on empty map dismisses the selection.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, map_inner: Rect) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let visible = app.visible_indices();
            match app.viewport.hit_test(
                &app.sites,
                &visible,
                mouse.column,
                mouse.row,
                map_inner,
            ) {
                Some(i) => app.select(i),
                None => {
                    // only clear when the click actually landed on the map
                    if app
                        .viewport
                        .cell_to_geo(mouse.column, mouse.row, map_inner)
                        .is_some()
                    {
                        app.clear_selection();
                    }
                }
            }
        }
        MouseEventKind::ScrollUp => app.viewport.zoom_in(),
        MouseEventKind::ScrollDown => app.viewport.zoom_out(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::data::record::SiteRecord;

    fn make_app() -> App {
        let mut site = SiteRecord::new(Some("Whitelee".into()), Some(539.0), None, 0.0, 0.0);
        site.operational_year = Some(2009);
        let mut cfg = ViewerConfig::global();
        // center the world view on the equator so cell math is predictable
        cfg.map.center_lat = 0.0;
        App::new(cfg, vec![site], 0)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn q_quits() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.quit);
    }

    #[test]
    fn esc_clears_selection_before_quitting() {
        let mut app = make_app();
        app.select(0);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.quit);
        assert_eq!(app.selected, None);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.quit);
    }

    #[test]
    fn brackets_drive_the_year_slider() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('[')));
        assert_eq!(app.filter.threshold, Some(2009));
        handle_key(&mut app, press(KeyCode::Char('0')));
        assert_eq!(app.filter.threshold, None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(!app.quit);
    }

    #[test]
    fn click_on_site_selects_it() {
        let mut app = make_app();
        // global viewport over a 100x50 map: site (0,0) sits at cell (50,25)
        let inner = Rect::new(0, 0, 100, 50);
        handle_mouse(&mut app, click(50, 25), inner);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn click_on_empty_map_clears_selection() {
        let mut app = make_app();
        app.select(0);
        let inner = Rect::new(0, 0, 100, 50);
        handle_mouse(&mut app, click(90, 5), inner);
        assert_eq!(app.selected, None);
    }

    #[test]
    fn click_outside_map_area_is_ignored() {
        let mut app = make_app();
        app.select(0);
        let inner = Rect::new(10, 10, 50, 20);
        handle_mouse(&mut app, click(2, 2), inner);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn scroll_zooms() {
        let mut app = make_app();
        let before = app.viewport.zoom;
        let mut ev = click(0, 0);
        ev.kind = MouseEventKind::ScrollUp;
        handle_mouse(&mut app, ev, Rect::new(0, 0, 100, 50));
        assert!(app.viewport.zoom > before);
    }
}
