//! Recording doubles for exercising the view without a window.

use std::cell::RefCell;

use macroquad::color::Color;

use crate::domain::{Engine, EngineError, GridCoord, Snapshot};
use crate::rendering::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineCall {
    Init,
    Step,
    InsertCell(i32, i32),
    CurrentSnapshot,
}

/// Engine with no rule: cells only change through `insert_cell`.
/// Every call is logged in order.
pub struct RecordingEngine {
    rows: i32,
    cols: i32,
    cells: Vec<GridCoord>,
    calls: RefCell<Vec<EngineCall>>,
}

impl RecordingEngine {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            cells: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_cells(mut self, cells: &[(i32, i32)]) -> Self {
        self.cells = cells.iter().copied().map(GridCoord::from).collect();
        self
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: fn(&EngineCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| call(c)).count()
    }

    pub fn steps(&self) -> usize {
        self.count(|c| matches!(c, EngineCall::Step))
    }

    pub fn inserts(&self) -> Vec<GridCoord> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                EngineCall::InsertCell(row, col) => Some(GridCoord::new(*row, *col)),
                _ => None,
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn record(&self, call: EngineCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Engine for RecordingEngine {
    fn init(&mut self) {
        self.record(EngineCall::Init);
    }

    fn step(&mut self) -> Snapshot {
        self.record(EngineCall::Step);
        Snapshot::new(self.cells.clone())
    }

    fn insert_cell(&mut self, row: i32, col: i32) -> Result<(), EngineError> {
        self.record(EngineCall::InsertCell(row, col));
        if row < 0 || col < 0 || row >= self.rows || col >= self.cols {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows as usize,
                cols: self.cols as usize,
            });
        }
        let coord = GridCoord::new(row, col);
        if !self.cells.contains(&coord) {
            self.cells.push(coord);
        }
        Ok(())
    }

    fn current_snapshot(&self) -> Snapshot {
        self.record(EngineCall::CurrentSnapshot);
        Snapshot::new(self.cells.clone())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { x: f32, y: f32, w: f32, h: f32 },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: Color },
    FillText { text: String, x: f32, y: f32, size: f32, color: Color },
}

/// Surface that remembers every draw call.
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    fill: Color,
    font_size: f32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            fill: Color::new(0.0, 0.0, 0.0, 1.0),
            font_size: 16.0,
        }
    }

    /// Number of clears, i.e. renders
    pub fn clears(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Clear { .. })).count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(DrawOp::Clear { x, y, w, h });
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(DrawOp::FillRect { x, y, w, h, color: self.fill });
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.ops.push(DrawOp::FillText {
            text: text.to_owned(),
            x,
            y,
            size: self.font_size,
            color: self.fill,
        });
    }
}
