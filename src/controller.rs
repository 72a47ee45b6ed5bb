use crate::cell::CellId;
use crate::error::SimulationError;
use crate::grid::GridSize;
use crate::render::Renderer;
use crate::search::Algorithm;
use crate::simulation::{RunOutcome, Simulation};
use log::{error, warn};

pub const UNREACHABLE_MESSAGE: &str = "Destination Node is not reachable";

/// Receives user facing messages. How they are shown is up to the front end.
pub trait NotificationSink {
    fn error(&mut self, message: &str);
    fn warning(&mut self, message: &str);
}

/// Forwards notifications to the [log] facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn error(&mut self, message: &str) {
        error!("{}", message);
    }
    fn warning(&mut self, message: &str) {
        warn!("{}", message);
    }
}

/// What a click on a cell does. Selecting one mode clears the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EditMode {
    #[default]
    None,
    SetStart,
    SetEnd,
    ToggleWall,
}

/// Routes front end actions to a [Simulation] and reports refusals to a [NotificationSink].
#[derive(Debug)]
pub struct Controller<N> {
    simulation: Simulation,
    mode: EditMode,
    sink: N,
}

impl<N: NotificationSink> Controller<N> {
    pub fn new(simulation: Simulation, sink: N) -> Controller<N> {
        Controller {
            simulation,
            mode: EditMode::None,
            sink,
        }
    }
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
    pub fn sink(&self) -> &N {
        &self.sink
    }
    pub fn mode(&self) -> EditMode {
        self.mode
    }
    pub fn select_mode(&mut self, mode: EditMode) {
        self.mode = mode;
    }
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.simulation.select_algorithm(algorithm);
    }

    fn report<T>(&mut self, result: Result<T, SimulationError>) -> Option<T> {
        result.map_err(|e| self.sink.error(&e.to_string())).ok()
    }

    /// Applies the current mode to the clicked cell. Placing an endpoint leaves the mode;
    /// wall mode stays on so several walls can be drawn in a row.
    pub fn click(&mut self, id: CellId) {
        match self.mode {
            EditMode::None => {}
            EditMode::SetStart => {
                let result = self.simulation.set_start(id);
                if self.report(result).is_some() {
                    self.mode = EditMode::None;
                }
            }
            EditMode::SetEnd => {
                let result = self.simulation.set_end(id);
                if self.report(result).is_some() {
                    self.mode = EditMode::None;
                }
            }
            EditMode::ToggleWall => {
                let result = self.simulation.toggle_wall(id);
                self.report(result);
            }
        }
    }

    /// Starts a run. Depth-first runs that miss the destination additionally warn.
    pub fn run<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Option<RunOutcome> {
        let result = self.simulation.start_simulation(renderer);
        let outcome = self.report(result)?;
        if outcome == RunOutcome::Unreachable
            && self.simulation.algorithm() == Some(Algorithm::DepthFirst)
        {
            self.sink.warning(UNREACHABLE_MESSAGE);
        }
        Some(outcome)
    }

    pub fn reset(&mut self) {
        self.simulation.reset();
        self.mode = EditMode::None;
    }

    /// Rebuilds the grid at `size` if the size selector allows it.
    pub fn resize(&mut self, size: usize) {
        if let Some(size) = self.report(GridSize::new(size)) {
            self.simulation.resize(size);
            self.mode = EditMode::None;
        }
    }
}
