use macroquad::prelude::*;
use tracing::debug;

use crate::application::{PointerEvent, Session, surface_relative, to_grid_coordinate};
use crate::domain::{Engine, GridCoord};

/// Route one pointer event through the interaction state machine.
///
/// Painting events insert the cell under the pointer and refresh the
/// displayed snapshot from the current generation, so the edit shows up
/// on the next frame without a step. Returns the painted cell, if any.
pub fn handle_pointer<E: Engine>(
    session: &mut Session<E>,
    event: PointerEvent,
) -> Option<GridCoord> {
    if !session.attached {
        return None;
    }

    let window_pos = session.interaction.apply(event)?;
    let (x, y) = surface_relative(window_pos, session.config.surface_origin);
    let cell = to_grid_coordinate(x, y, session.config.cell_size);

    debug!(row = cell.row, col = cell.col, "painting cell");
    if let Err(err) = session.engine.insert_cell(cell.row, cell.col) {
        debug!(%err, "paint ignored");
    }
    session.latest = Some(session.engine.current_snapshot());

    Some(cell)
}

/// Turns polled mouse state into discrete pointer events.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_position: Option<(f32, f32)>,
    /// A press has been reported and its release has not
    pressed: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for one frame's worth of mouse state, in the order they happened.
    ///
    /// `held` is the button level. A release edge can be lost when the button
    /// goes up outside the window, so an outstanding press whose button is no
    /// longer held is released too.
    pub fn translate(
        &mut self,
        pressed: bool,
        released: bool,
        held: bool,
        position: (f32, f32),
    ) -> Vec<PointerEvent> {
        let (x, y) = position;
        let moved = self.last_position.is_some_and(|last| last != position);
        self.last_position = Some(position);

        let mut events = Vec::new();
        if pressed {
            self.pressed = true;
            events.push(PointerEvent::Press { x, y });
        } else if moved {
            events.push(PointerEvent::Move { x, y });
        }
        if self.pressed && (released || !held) {
            self.pressed = false;
            events.push(PointerEvent::Release);
        }
        events
    }

    /// Poll the left mouse button
    pub fn poll(&mut self) -> Vec<PointerEvent> {
        self.translate(
            is_mouse_button_pressed(MouseButton::Left),
            is_mouse_button_released(MouseButton::Left),
            is_mouse_button_down(MouseButton::Left),
            mouse_position(),
        )
    }
}
