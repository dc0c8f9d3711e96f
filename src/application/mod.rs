mod mapper;
mod interaction;
mod session;
mod coordinator;

pub use mapper::{to_grid_coordinate, surface_relative};
pub use interaction::{InteractionState, Mode, PointerEvent};
pub use session::Session;
pub use coordinator::{StepClock, FrameReport};
