use macroquad::prelude::*;

use super::Surface;

/// Draws onto the macroquad window, offset by the surface origin.
pub struct MacroquadSurface {
    origin: (f32, f32),
    background: Color,
    fill: Color,
    font_size: f32,
}

impl MacroquadSurface {
    pub fn new(origin: (f32, f32)) -> Self {
        Self {
            origin,
            background: WHITE,
            fill: BLACK,
            font_size: 16.0,
        }
    }
}

impl Surface for MacroquadSurface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(self.origin.0 + x, self.origin.1 + y, w, h, self.background);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        draw_rectangle(self.origin.0 + x, self.origin.1 + y, w, h, self.fill);
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        draw_text(text, self.origin.0 + x, self.origin.1 + y, self.font_size, self.fill);
    }
}
