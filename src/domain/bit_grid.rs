//! Bit-packed bounded grid.
//! Each row is stored as a run of u64 words, one bit per cell.
//! Cells beyond the grid edge are permanently dead: the grid does not wrap.

use rand::Rng;
use rayon::prelude::*;

use super::{Cell, GridCoord, Rule};

const WORD_BITS: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    rows: usize,
    cols: usize,
    /// Words per row (ceil(cols / 64))
    stride: usize,
    /// Row-major words; padding bits past `cols` stay zero
    words: Vec<u64>,
}

impl BitGrid {
    /// Create new empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        let stride = cols.div_ceil(WORD_BITS);
        Self {
            rows,
            cols,
            stride,
            words: vec![0; stride * rows],
        }
    }

    /// Grid dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether a signed coordinate names a cell of this grid
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> (usize, u64) {
        (row * self.stride + col / WORD_BITS, 1u64 << (col % WORD_BITS))
    }

    /// Cell state at (row, col); anything off the grid reads as dead
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let (idx, bit) = self.locate(row, col);
        self.words[idx] & bit != 0
    }

    /// Set cell state at (row, col); off-grid writes are dropped
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let (idx, bit) = self.locate(row, col);
        if alive {
            self.words[idx] |= bit;
        } else {
            self.words[idx] &= !bit;
        }
    }

    #[inline]
    fn is_alive_at(&self, row: i32, col: i32) -> bool {
        self.contains(row, col) && self.get(row as usize, col as usize)
    }

    /// Count live neighbours; the border counts as dead
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as i32, col as i32);
        let mut count = 0u8;
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if (dr != 0 || dc != 0) && self.is_alive_at(row + dr, col + dc) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Count total alive cells
    pub fn population(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Write the next generation of `self` into `next`, rows in parallel.
    /// `next` must have the same dimensions.
    pub fn evolve_into(&self, rule: &dyn Rule, next: &mut BitGrid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        if self.stride == 0 {
            return;
        }

        let cols = self.cols;
        next.words
            .par_chunks_mut(self.stride)
            .enumerate()
            .for_each(|(row, out)| {
                out.iter_mut().for_each(|w| *w = 0);
                for col in 0..cols {
                    let current = Cell::from_alive(self.get(row, col));
                    let neighbors = self.live_neighbors(row, col);
                    if rule.evolve(current, neighbors).is_alive() {
                        out[col / WORD_BITS] |= 1u64 << (col % WORD_BITS);
                    }
                }
            });
    }

    /// Alive cells in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.words.iter().enumerate().flat_map(move |(idx, &word)| {
            let row = idx / self.stride;
            let base = (idx % self.stride) * WORD_BITS;
            SetBits(word).map(move |bit| GridCoord::new(row as i32, (base + bit) as i32))
        })
    }

    /// Bring each cell to life independently with probability `density`
    pub fn scatter<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        for row in 0..self.rows {
            for col in 0..self.cols {
                if rng.random_bool(density) {
                    self.set(row, col, true);
                }
            }
        }
    }
}

/// Iterates the indices of set bits, lowest first.
struct SetBits(u64);

impl Iterator for SetBits {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(bit)
    }
}
