// Domain layer - engine seam and the bundled life engine
pub mod domain;

// Application layer - view state, pointer state machine, frame scheduling
pub mod application;

// Infrastructure layer - drawing and host input
pub mod rendering;
pub mod input;

pub mod config;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use domain::{Engine, EngineError, GridCoord, LifeEngine, Snapshot};
pub use application::{FrameReport, PointerEvent, Session};
pub use config::ViewConfig;
