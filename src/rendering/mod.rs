mod macroquad_surface;

pub use macroquad_surface::MacroquadSurface;

use macroquad::color::Color;

use crate::config::ViewConfig;
use crate::domain::Snapshot;

/// Live cell color
pub const CELL_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
/// Translucent red wash over the whole surface while paused
pub const PAUSE_OVERLAY_COLOR: Color = Color::new(1.0, 0.0, 0.0, 0.1);
pub const PAUSE_LABEL_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const PAUSE_LABEL: &str = "PAUSED - Drawing Mode";
pub const PAUSE_LABEL_SIZE: f32 = 20.0;
pub const PAUSE_LABEL_POSITION: (f32, f32) = (10.0, 30.0);

/// A 2D raster target in surface-relative pixels.
///
/// Mirrors a canvas context: fill color and font size are sticky state
/// consumed by the next fill call.
pub trait Surface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_fill_color(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn set_font_size(&mut self, size: f32);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
}

/// Repaint the whole surface from a snapshot
pub fn render<S: Surface + ?Sized>(
    surface: &mut S,
    snapshot: &Snapshot,
    paused: bool,
    config: &ViewConfig,
) {
    let cell_size = config.cell_size;
    surface.clear(0.0, 0.0, config.surface_width, config.surface_height);

    surface.set_fill_color(CELL_COLOR);
    for cell in snapshot.active_cells() {
        let (x, y) = cell.to_pixel(cell_size);
        surface.fill_rect(x, y, cell_size, cell_size);
    }

    // After the cells so the wash tints them too
    if paused {
        draw_pause_overlay(surface, config);
    }
}

fn draw_pause_overlay<S: Surface + ?Sized>(surface: &mut S, config: &ViewConfig) {
    surface.set_fill_color(PAUSE_OVERLAY_COLOR);
    surface.fill_rect(0.0, 0.0, config.surface_width, config.surface_height);

    let (x, y) = PAUSE_LABEL_POSITION;
    surface.set_fill_color(PAUSE_LABEL_COLOR);
    surface.set_font_size(PAUSE_LABEL_SIZE);
    surface.fill_text(PAUSE_LABEL, x, y);
}
