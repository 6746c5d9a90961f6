mod layout;
mod menu;
mod table;

use crate::canvas::Viewport;
use crate::tui::app::{AppState, Scene};
use ratatui::prelude::{Frame, Rect};

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => table::draw_table(f, app),
    }
}

/// The part of the terminal the table canvas is stretched over.
pub fn canvas_viewport(area: Rect) -> Viewport {
    Viewport::new(layout::split_table(area).0)
}
