use crate::animation::{AnimationTimings, Timeline};
use crate::cell::{CellId, CellState};
use crate::error::SimulationError;
use crate::graph::build_adjacency;
use crate::grid::{CellGrid, GridSize};
use crate::render::Renderer;
use crate::search::{Algorithm, SearchTree, Traversal};
use core::fmt;
use log::{debug, info, warn};

/// Where a [Simulation] is in its run. Edits are only accepted while [RunPhase::Idle]; once a
/// run starts the grid stays locked until [Simulation::reset].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunPhase {
    Idle,
    BuildingGraph,
    Traversing,
    BuildingPath,
    Unreachable,
    /// The run has resolved and the grid awaits a reset.
    Locked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Found { path: Vec<CellId> },
    Unreachable,
}

impl RunOutcome {
    pub fn path(&self) -> Option<&[CellId]> {
        match self {
            RunOutcome::Found { path } => Some(path.as_slice()),
            RunOutcome::Unreachable => None,
        }
    }
}

/// Everything a run needs: the grid, the chosen endpoints and algorithm, and the phase of the
/// current run. All edits are validated here; a refused edit changes nothing.
#[derive(Clone, Debug)]
pub struct Simulation {
    size: GridSize,
    grid: CellGrid,
    start: Option<CellId>,
    destination: Option<CellId>,
    algorithm: Option<Algorithm>,
    phase: RunPhase,
    destination_reachable: bool,
    last_search: Option<SearchTree>,
    pub timings: AnimationTimings,
}

impl Default for Simulation {
    fn default() -> Simulation {
        Simulation::new(GridSize::default())
    }
}

impl Simulation {
    pub fn new(size: GridSize) -> Simulation {
        Simulation {
            size,
            grid: CellGrid::new(size),
            start: None,
            destination: None,
            algorithm: None,
            phase: RunPhase::Idle,
            destination_reachable: true,
            last_search: None,
            timings: AnimationTimings::default(),
        }
    }
    pub fn with_timings(mut self, timings: AnimationTimings) -> Simulation {
        self.timings = timings;
        self
    }
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }
    pub fn size(&self) -> GridSize {
        self.size
    }
    pub fn start(&self) -> Option<CellId> {
        self.start
    }
    pub fn destination(&self) -> Option<CellId> {
        self.destination
    }
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }
    pub fn phase(&self) -> RunPhase {
        self.phase
    }
    /// `false` only after a run that failed to reach the destination.
    pub fn destination_reachable(&self) -> bool {
        self.destination_reachable
    }
    /// The search tree of the last run, until the next reset.
    pub fn last_search(&self) -> Option<&SearchTree> {
        self.last_search.as_ref()
    }

    fn ensure_editable(&self) -> Result<(), SimulationError> {
        if self.phase == RunPhase::Idle {
            Ok(())
        } else {
            Err(SimulationError::RunInProgress)
        }
    }
    /// Checks that `id` is an open cell on the grid.
    fn ensure_open(&self, id: CellId) -> Result<(), SimulationError> {
        let cell = self.grid.cell(id).ok_or(SimulationError::UnknownCell(id))?;
        if cell.wall {
            return Err(SimulationError::WallSelected(id));
        }
        Ok(())
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        debug!("Selected {}", algorithm);
        self.algorithm = Some(algorithm);
    }

    /// Moves the start to `id`. The previous start, if any, turns back to unvisited.
    pub fn set_start(&mut self, id: CellId) -> Result<(), SimulationError> {
        self.ensure_editable()?;
        self.ensure_open(id)?;
        if self.destination == Some(id) {
            return Err(SimulationError::StartIsDestination(id));
        }
        if let Some(previous) = self.start.replace(id) {
            self.grid.paint(previous, CellState::Unvisited);
        }
        self.grid.paint(id, CellState::Endpoint);
        debug!("Start set to {}", id);
        Ok(())
    }

    /// Moves the destination to `id`. The previous destination, if any, turns back to
    /// unvisited.
    pub fn set_end(&mut self, id: CellId) -> Result<(), SimulationError> {
        self.ensure_editable()?;
        self.ensure_open(id)?;
        if self.start == Some(id) {
            return Err(SimulationError::DestinationIsStart(id));
        }
        if let Some(previous) = self.destination.replace(id) {
            self.grid.paint(previous, CellState::Unvisited);
        }
        self.grid.paint(id, CellState::Endpoint);
        debug!("Destination set to {}", id);
        Ok(())
    }

    /// Flips the wall flag of `id` and returns whether anything changed. The start and
    /// destination cells can not become walls.
    pub fn toggle_wall(&mut self, id: CellId) -> Result<bool, SimulationError> {
        self.ensure_editable()?;
        let wall = self
            .grid
            .cell(id)
            .ok_or(SimulationError::UnknownCell(id))?
            .wall;
        if self.start == Some(id) || self.destination == Some(id) {
            return Ok(false);
        }
        self.grid.set_wall(id, !wall);
        debug!("{} {}", if wall { "Removed wall at" } else { "Placed wall at" }, id);
        Ok(true)
    }

    /// Runs the selected algorithm from the start to the destination and replays it through
    /// `renderer`. Afterwards the grid stays locked until [reset](Self::reset).
    pub fn start_simulation<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<RunOutcome, SimulationError> {
        self.ensure_editable()?;
        let start = self.start.ok_or(SimulationError::MissingStart)?;
        let destination = self.destination.ok_or(SimulationError::MissingDestination)?;
        let algorithm = self.algorithm.ok_or(SimulationError::MissingAlgorithm)?;

        self.phase = RunPhase::BuildingGraph;
        let graph = build_adjacency(&self.grid);
        let component_reachable = graph.reachable(start, destination);
        if component_reachable {
            info!("{} is reachable from {}, running {}", destination, start, algorithm);
        } else {
            info!("{} is not reachable from {}, running {}", destination, start, algorithm);
        }

        self.phase = RunPhase::Traversing;
        let mut events = Vec::new();
        let tree = algorithm.traverse(&graph, start, destination, |e| events.push(e));
        info!("{} visited {} cells", algorithm, tree.levels.len());

        let path = if tree.found {
            self.phase = RunPhase::BuildingPath;
            tree.path()
        } else {
            None
        };
        if path.is_none() {
            self.phase = RunPhase::Unreachable;
            self.destination_reachable = false;
            if component_reachable {
                warn!("Reachable destination could not be pathed to, is the adjacency list correct?");
            }
        }

        let timeline = Timeline::build(
            &events,
            path.as_deref(),
            start,
            destination,
            &self.timings,
        );
        timeline.play(&mut self.grid, renderer);
        self.last_search = Some(tree);
        self.phase = RunPhase::Locked;

        Ok(match path {
            Some(path) => {
                info!("Path of {} cells from {} to {}", path.len(), start, destination);
                RunOutcome::Found { path }
            }
            None => RunOutcome::Unreachable,
        })
    }

    /// Clears walls, endpoints and every marking and unlocks the grid. The grid size and the
    /// selected algorithm are kept.
    pub fn reset(&mut self) {
        self.grid = CellGrid::new(self.size);
        self.start = None;
        self.destination = None;
        self.destination_reachable = true;
        self.last_search = None;
        self.phase = RunPhase::Idle;
        debug!("Reset {0}x{0} grid", self.size.get());
    }

    /// Rebuilds the grid at a new size, which implies a reset.
    pub fn resize(&mut self, size: GridSize) {
        self.size = size;
        self.reset();
    }
}

/// Like the grid rendering, but marks the start with `S` and the destination with `E`.
impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.rows() {
            let line = row
                .iter()
                .map(|c| {
                    if Some(c.id) == self.start {
                        'S'
                    } else if Some(c.id) == self.destination {
                        'E'
                    } else {
                        c.state.symbol()
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Instant;

    fn small(size: usize) -> Simulation {
        Simulation::new(GridSize::unchecked(size)).with_timings(AnimationTimings::instant())
    }

    fn ready(size: usize, algorithm: Algorithm) -> Simulation {
        let mut sim = small(size);
        sim.select_algorithm(algorithm);
        sim.set_start(CellId(1)).unwrap();
        sim.set_end(CellId(size * size)).unwrap();
        sim
    }

    #[test]
    fn runs_need_start_destination_and_algorithm() {
        let mut sim = small(3);
        assert_eq!(
            sim.start_simulation(&mut Instant),
            Err(SimulationError::MissingStart)
        );
        sim.set_start(CellId(1)).unwrap();
        assert_eq!(
            sim.start_simulation(&mut Instant),
            Err(SimulationError::MissingDestination)
        );
        sim.set_end(CellId(9)).unwrap();
        assert_eq!(
            sim.start_simulation(&mut Instant),
            Err(SimulationError::MissingAlgorithm)
        );
        assert_eq!(sim.phase(), RunPhase::Idle);
    }

    #[test]
    fn endpoints_can_not_collide_or_sit_on_walls() {
        let mut sim = small(3);
        sim.toggle_wall(CellId(5)).unwrap();
        assert_eq!(
            sim.set_start(CellId(5)),
            Err(SimulationError::WallSelected(CellId(5)))
        );
        sim.set_start(CellId(1)).unwrap();
        assert_eq!(
            sim.set_end(CellId(1)),
            Err(SimulationError::DestinationIsStart(CellId(1)))
        );
        sim.set_end(CellId(9)).unwrap();
        let before = sim.grid().clone();
        assert_eq!(
            sim.set_start(CellId(9)),
            Err(SimulationError::StartIsDestination(CellId(9)))
        );
        assert_eq!(
            sim.set_start(CellId(10)),
            Err(SimulationError::UnknownCell(CellId(10)))
        );
        assert_eq!(sim.grid(), &before);
        assert_eq!(sim.start(), Some(CellId(1)));
    }

    #[test]
    fn moving_an_endpoint_clears_the_old_one() {
        let mut sim = small(3);
        sim.set_start(CellId(1)).unwrap();
        sim.set_start(CellId(2)).unwrap();
        assert_eq!(sim.grid().cell(CellId(1)).unwrap().state, CellState::Unvisited);
        assert_eq!(sim.grid().cell(CellId(2)).unwrap().state, CellState::Endpoint);
    }

    #[test]
    fn walls_toggle_except_on_endpoints() {
        let mut sim = small(3);
        sim.set_start(CellId(1)).unwrap();
        sim.set_end(CellId(9)).unwrap();
        assert_eq!(sim.toggle_wall(CellId(1)), Ok(false));
        assert_eq!(sim.toggle_wall(CellId(9)), Ok(false));
        assert!(!sim.grid().is_wall(CellId(1)));
        assert_eq!(sim.grid().cell(CellId(9)).unwrap().state, CellState::Endpoint);

        assert_eq!(sim.toggle_wall(CellId(5)), Ok(true));
        let cell = sim.grid().cell(CellId(5)).unwrap();
        assert!(cell.wall);
        assert_eq!(cell.state, CellState::Wall);
        assert_eq!(sim.toggle_wall(CellId(5)), Ok(true));
        let cell = sim.grid().cell(CellId(5)).unwrap();
        assert!(!cell.wall);
        assert_eq!(cell.state, CellState::Unvisited);
    }

    #[test]
    fn open_grid_run_paints_shortest_path() {
        let mut sim = ready(3, Algorithm::BreadthFirst);
        let outcome = sim.start_simulation(&mut Instant).unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(sim.last_search().unwrap().level(CellId(9)), Some(4));
        assert!(sim.destination_reachable());
        assert_eq!(sim.phase(), RunPhase::Locked);
        for &id in &path[1..path.len() - 1] {
            assert_eq!(sim.grid().cell(id).unwrap().state, CellState::Path);
        }
        assert_eq!(sim.grid().cell(CellId(1)).unwrap().state, CellState::Endpoint);
        assert_eq!(sim.grid().cell(CellId(9)).unwrap().state, CellState::Endpoint);
    }

    #[test]
    fn walled_off_destination_is_unreachable() {
        for algorithm in Algorithm::ALL {
            let mut sim = small(3);
            sim.select_algorithm(algorithm);
            sim.toggle_wall(CellId(2)).unwrap();
            sim.toggle_wall(CellId(4)).unwrap();
            sim.set_start(CellId(1)).unwrap();
            sim.set_end(CellId(9)).unwrap();
            assert_eq!(
                sim.start_simulation(&mut Instant),
                Ok(RunOutcome::Unreachable)
            );
            assert!(!sim.destination_reachable());
            assert_eq!(sim.phase(), RunPhase::Locked);
        }
    }

    #[test]
    fn grid_is_locked_until_reset() {
        let mut sim = ready(3, Algorithm::DepthFirst);
        sim.start_simulation(&mut Instant).unwrap();
        assert_eq!(sim.toggle_wall(CellId(5)), Err(SimulationError::RunInProgress));
        assert_eq!(sim.set_start(CellId(5)), Err(SimulationError::RunInProgress));
        assert_eq!(sim.set_end(CellId(5)), Err(SimulationError::RunInProgress));
        assert_eq!(
            sim.start_simulation(&mut Instant),
            Err(SimulationError::RunInProgress)
        );
        sim.reset();
        assert_eq!(sim.phase(), RunPhase::Idle);
        assert_eq!(sim.toggle_wall(CellId(5)), Ok(true));
    }

    #[test]
    fn reset_restores_a_fresh_grid() {
        let mut sim = ready(4, Algorithm::BreadthFirst);
        sim.toggle_wall(CellId(6)).unwrap();
        sim.start_simulation(&mut Instant).unwrap();
        sim.reset();
        assert_eq!(sim.grid(), &CellGrid::new(GridSize::unchecked(4)));
        assert_eq!(sim.start(), None);
        assert_eq!(sim.destination(), None);
        assert!(sim.destination_reachable());
        assert!(sim.last_search().is_none());
        assert_eq!(sim.algorithm(), Some(Algorithm::BreadthFirst));
    }

    #[test]
    fn resize_rebuilds_the_grid() {
        let mut sim = ready(3, Algorithm::BreadthFirst);
        sim.resize(GridSize::new(10).unwrap());
        assert_eq!(sim.grid().len(), 100);
        assert_eq!(sim.start(), None);
        assert_eq!(sim.phase(), RunPhase::Idle);
    }

    #[test]
    fn display_marks_endpoints() {
        let mut sim = ready(3, Algorithm::BreadthFirst);
        sim.toggle_wall(CellId(5)).unwrap();
        assert_eq!(sim.to_string(), "S..\n.#.\n..E\n");
    }
}
