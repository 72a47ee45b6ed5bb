//! # grid_traversal
//!
//! The core of a grid pathfinding visualizer. Walls are drawn on a square grid, a start and a
//! destination are picked, and either
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) or
//! [depth-first search](https://en.wikipedia.org/wiki/Depth-first_search) explores the grid
//! over the four orthogonal directions. Both traversals are synchronous and report every step
//! as a [TraversalEvent]; a [Timeline] turns those steps and the reconstructed path into timed
//! frames which a [Renderer] plays back. The [Simulation] context enforces the editing rules
//! and the run state machine, and the [Controller] routes clicks and reports refusals.
//!
//! ```
//! use grid_traversal::{Algorithm, AnimationTimings, CellId, GridSize, Instant, Simulation};
//!
//! let mut sim = Simulation::new(GridSize::default()).with_timings(AnimationTimings::instant());
//! sim.select_algorithm(Algorithm::BreadthFirst);
//! sim.set_start(CellId(1)).unwrap();
//! sim.set_end(CellId(64)).unwrap();
//! let outcome = sim.start_simulation(&mut Instant).unwrap();
//! assert_eq!(outcome.path().map(|p| p.len()), Some(15));
//! ```
pub mod animation;
pub mod cell;
pub mod controller;
pub mod error;
pub mod graph;
pub mod grid;
pub mod render;
pub mod search;
pub mod simulation;

use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Insertion ordered map used for adjacency lists and search trees.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

pub use animation::{AnimationTimings, Frame, Timeline};
pub use cell::{Cell, CellId, CellState};
pub use controller::{Controller, EditMode, LogSink, NotificationSink};
pub use error::SimulationError;
pub use graph::{build_adjacency, Adjacency};
pub use grid::{CellGrid, Direction, GridSize};
pub use render::{Instant, Renderer, Sleeping};
pub use search::{
    bfs, dfs, reconstruct_path, Algorithm, ParentMap, SearchTree, Traversal, TraversalEvent,
};
pub use simulation::{RunOutcome, RunPhase, Simulation};
