use crate::domain::GridCoord;

/// Convert a surface-relative pixel position to the cell underneath it.
///
/// Floors rather than truncates, so positions left of or above the origin
/// land on negative rows/columns instead of folding onto row/column 0.
pub fn to_grid_coordinate(pixel_x: f32, pixel_y: f32, cell_size: f32) -> GridCoord {
    GridCoord::new(
        (pixel_y / cell_size).floor() as i32,
        (pixel_x / cell_size).floor() as i32,
    )
}

/// Translate a window position into surface space
pub fn surface_relative(window_pos: (f32, f32), surface_origin: (f32, f32)) -> (f32, f32) {
    (window_pos.0 - surface_origin.0, window_pos.1 - surface_origin.1)
}
