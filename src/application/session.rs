use tracing::info;

use super::{InteractionState, StepClock};
use crate::config::ViewConfig;
use crate::domain::{Engine, Snapshot};

/// Session owns everything one view mutates between frames.
///
/// The frame loop (`Session::frame`) and the pointer handler
/// (`input::handle_pointer`) both take it by `&mut`, so the host's
/// single-threaded callback order is the only synchronisation needed.
pub struct Session<E: Engine> {
    pub(crate) engine: E,
    pub(crate) config: ViewConfig,
    pub(crate) interaction: InteractionState,
    pub(crate) clock: StepClock,
    pub(crate) latest: Option<Snapshot>,
    pub(crate) attached: bool,
}

impl<E: Engine> Session<E> {
    /// Initialise the engine and attach a fresh view to it.
    /// Nothing is drawn until the first snapshot arrives.
    pub fn new(mut engine: E, config: ViewConfig) -> Self {
        engine.init();
        info!(
            step_interval_ms = config.step_interval_ms,
            cell_size = config.cell_size,
            "view attached"
        );

        Self {
            engine,
            config,
            interaction: InteractionState::new(),
            clock: StepClock::new(config.step_interval_ms),
            latest: None,
            attached: true,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn clock(&self) -> &StepClock {
        &self.clock
    }

    pub fn is_paused(&self) -> bool {
        self.interaction.is_paused()
    }

    /// The snapshot the next frame will draw
    pub fn latest_snapshot(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Tear the view down. Later frames and pointer events are ignored.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            info!("view detached");
        }
    }
}
