//! View configuration.
//!
//! Plain values with defaults matching the stock 1200x800 surface; there is
//! no file or CLI layer.

/// Logical surface width in pixels
pub const SURFACE_WIDTH: f32 = 1200.0;
/// Logical surface height in pixels
pub const SURFACE_HEIGHT: f32 = 800.0;
/// Edge length of one cell in pixels
pub const CELL_SIZE: f32 = 4.0;
/// Target generation rate
pub const STEPS_PER_SECOND: f64 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
    pub surface_width: f32,
    pub surface_height: f32,
    pub cell_size: f32,
    /// Minimum render-clock time between two generations
    pub step_interval_ms: f64,
    /// Top-left of the surface inside the host window
    pub surface_origin: (f32, f32),
    /// Fraction of cells the engine brings to life at init (0 = blank)
    pub seed_density: f64,
}

impl ViewConfig {
    /// Set the generation rate in steps per second
    pub fn with_step_rate(mut self, steps_per_second: f64) -> Self {
        self.step_interval_ms = 1000.0 / steps_per_second;
        self
    }

    pub fn with_surface_origin(mut self, x: f32, y: f32) -> Self {
        self.surface_origin = (x, y);
        self
    }

    pub fn with_seed_density(mut self, density: f64) -> Self {
        self.seed_density = density;
        self
    }

    /// Grid size implied by the surface as (rows, cols)
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let rows = (self.surface_height / self.cell_size).floor() as usize;
        let cols = (self.surface_width / self.cell_size).floor() as usize;
        (rows, cols)
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            cell_size: CELL_SIZE,
            step_interval_ms: 1000.0 / STEPS_PER_SECOND,
            surface_origin: (0.0, 0.0),
            seed_density: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_200_by_300() {
        assert_eq!(ViewConfig::default().grid_dimensions(), (200, 300));
    }

    #[test]
    fn test_with_step_rate() {
        let config = ViewConfig::default().with_step_rate(10.0);
        assert_eq!(config.step_interval_ms, 100.0);
    }

    #[test]
    fn test_default_interval_is_sixty_hertz() {
        let interval = ViewConfig::default().step_interval_ms;
        assert!((interval - 16.666).abs() < 0.01);
    }
}
