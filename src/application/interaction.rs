/// What the pointer is currently doing to the view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Not painting; the simulation runs
    #[default]
    Idle,
    /// Pointer held down; the simulation is paused while cells are painted
    Painting,
}

/// Pointer input in window coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Release,
}

/// Pointer and pause flags.
///
/// Kept as two named fields even though one transition table drives both:
/// `pointer_down` is what the user is doing, `paused` is what the loop obeys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pointer_down: bool,
    paused: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        if self.pointer_down { Mode::Painting } else { Mode::Idle }
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Apply one pointer event.
    /// Returns the window position to paint, if the event paints.
    pub fn apply(&mut self, event: PointerEvent) -> Option<(f32, f32)> {
        match (self.mode(), event) {
            (_, PointerEvent::Press { x, y }) => {
                self.pointer_down = true;
                self.paused = true;
                Some((x, y))
            }
            (Mode::Painting, PointerEvent::Move { x, y }) => Some((x, y)),
            (Mode::Idle, PointerEvent::Move { .. }) => None,
            (_, PointerEvent::Release) => {
                self.pointer_down = false;
                self.paused = false;
                None
            }
        }
    }
}
