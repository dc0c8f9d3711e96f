use super::Cell;

/// Trait for cellular automaton rules
/// Lets the engine run any birth/survival ruleset
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Rule in B/S notation, e.g. "B3/S23"
    fn notation(&self) -> &'static str;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Builds a bit mask with one bit set per neighbour count.
const fn count_mask(counts: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < counts.len() {
        mask |= 1 << counts[i];
        i += 1;
    }
    mask
}

/// A "life-like" rule: birth and survival each depend only on the
/// number of live neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeLikeRule {
    name: &'static str,
    notation: &'static str,
    birth: u16,
    survival: u16,
}

impl LifeLikeRule {
    pub const fn new(
        name: &'static str,
        notation: &'static str,
        birth: &[u8],
        survival: &[u8],
    ) -> Self {
        Self {
            name,
            notation,
            birth: count_mask(birth),
            survival: count_mask(survival),
        }
    }
}

impl Rule for LifeLikeRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn notation(&self) -> &'static str {
        self.notation
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let mask = if current.is_alive() { self.survival } else { self.birth };
        Cell::from_alive(neighbors <= 8 && mask & (1 << neighbors) != 0)
    }
}

/// Conway's Game of Life
pub const CONWAY: LifeLikeRule = LifeLikeRule::new("Conway", "B3/S23", &[3], &[2, 3]);

/// HighLife: Conway plus birth on 6, grows replicators
pub const HIGH_LIFE: LifeLikeRule = LifeLikeRule::new("HighLife", "B36/S23", &[3, 6], &[2, 3]);

/// Seeds: nothing survives, everything explodes
pub const SEEDS: LifeLikeRule = LifeLikeRule::new("Seeds", "B2/S", &[2], &[]);

/// Day & Night: symmetric under inversion
pub const DAY_AND_NIGHT: LifeLikeRule =
    LifeLikeRule::new("Day&Night", "B3678/S34678", &[3, 6, 7, 8], &[3, 4, 6, 7, 8]);

/// Get all available rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(CONWAY),
        Box::new(HIGH_LIFE),
        Box::new(SEEDS),
        Box::new(DAY_AND_NIGHT),
    ]
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(CONWAY)
}
