//! The simulation seam.
//!
//! The view never knows how generations are computed. It drives any type
//! implementing [`Engine`] through four calls and treats the returned
//! snapshots as opaque values.

use super::Snapshot;

/// Failures an engine may report back to the view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The coordinate does not name a cell of the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i32,
        col: i32,
        rows: usize,
        cols: usize,
    },
}

/// A cellular automaton driven one generation at a time.
pub trait Engine {
    /// Establish the initial state. Must run exactly once before any other
    /// call; calling it again resets the simulation.
    fn init(&mut self);

    /// Advance exactly one generation and report the resulting active cells.
    fn step(&mut self) -> Snapshot;

    /// Mark a cell alive in the current generation without advancing it.
    fn insert_cell(&mut self, row: i32, col: i32) -> Result<(), EngineError>;

    /// Active cells of the current generation.
    fn current_snapshot(&self) -> Snapshot;
}
