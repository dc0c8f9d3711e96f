use tracing::{info, trace};

use super::{BitGrid, Engine, EngineError, Rule, Snapshot, default_rule};
use crate::config::ViewConfig;

/// Double-buffered life-like automaton on a bounded grid.
pub struct LifeEngine {
    current: BitGrid,
    next: BitGrid,
    rule: Box<dyn Rule>,
    generation: u64,
    seed_density: f64,
}

impl LifeEngine {
    /// Create an engine with an empty grid of the given size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            current: BitGrid::new(rows, cols),
            next: BitGrid::new(rows, cols),
            rule: default_rule(),
            generation: 0,
            seed_density: 0.0,
        }
    }

    /// Engine sized to fill the configured surface
    pub fn from_config(config: &ViewConfig) -> Self {
        let (rows, cols) = config.grid_dimensions();
        Self::new(rows, cols).with_seed_density(config.seed_density)
    }

    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rule = rule;
        self
    }

    /// Random live-cell density applied by `init`
    pub fn with_seed_density(mut self, density: f64) -> Self {
        self.seed_density = density;
        self
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }
}

impl Engine for LifeEngine {
    fn init(&mut self) {
        self.current.clear();
        self.next.clear();
        self.generation = 0;
        if self.seed_density > 0.0 {
            self.current.scatter(&mut rand::rng(), self.seed_density);
        }

        let (rows, cols) = self.dimensions();
        info!(
            rows,
            cols,
            rule = self.rule.notation(),
            population = self.population(),
            "engine initialised"
        );
    }

    fn step(&mut self) -> Snapshot {
        self.current.evolve_into(self.rule.as_ref(), &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        trace!(generation = self.generation, population = self.population(), "stepped");
        self.current_snapshot()
    }

    fn insert_cell(&mut self, row: i32, col: i32) -> Result<(), EngineError> {
        if !self.current.contains(row, col) {
            let (rows, cols) = self.dimensions();
            return Err(EngineError::OutOfBounds { row, col, rows, cols });
        }
        self.current.set(row as usize, col as usize, true);
        Ok(())
    }

    fn current_snapshot(&self) -> Snapshot {
        self.current.alive_cells().collect()
    }
}
