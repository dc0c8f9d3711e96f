mod cell;
mod snapshot;
mod engine;
mod bit_grid;
mod life_engine;
pub mod rules;

pub use cell::{Cell, GridCoord};
pub use snapshot::Snapshot;
pub use engine::{Engine, EngineError};
pub use bit_grid::BitGrid;
pub use life_engine::LifeEngine;
pub use rules::{Rule, LifeLikeRule, all_rules, default_rule};
