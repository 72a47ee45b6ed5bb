use crate::cell::CellId;
use crate::graph::Adjacency;
use crate::FxIndexMap;
use core::fmt;

pub mod bfs;
pub mod dfs;
pub mod path;

pub use bfs::{bfs, BreadthFirst};
pub use dfs::{dfs, DepthFirst};
pub use path::{is_valid_path, reconstruct_path};

/// Visited cell to the cell it was reached from. The start cell has no entry.
pub type ParentMap = FxIndexMap<CellId, CellId>;

/// A single step of a traversal, emitted in the order the traversal takes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraversalEvent {
    /// Breadth-first search discovered `cell` at distance `level` from the start.
    Discovered { cell: CellId, level: usize },
    /// Depth-first search entered `cell` at recursion depth `depth`.
    Visited { cell: CellId, depth: usize },
    /// Depth-first search left `cell` without having found the goal below it.
    Backtracked { cell: CellId },
}

impl TraversalEvent {
    pub fn cell(&self) -> CellId {
        match *self {
            TraversalEvent::Discovered { cell, .. }
            | TraversalEvent::Visited { cell, .. }
            | TraversalEvent::Backtracked { cell } => cell,
        }
    }
}

/// Result of a traversal from which the path to the goal can be extracted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTree {
    pub start: CellId,
    pub goal: CellId,
    pub parents: ParentMap,
    /// Visited cells in visiting order with their level (BFS) or depth (DFS). Includes the
    /// start at 0.
    pub levels: FxIndexMap<CellId, usize>,
    pub found: bool,
}

impl SearchTree {
    pub fn new(start: CellId, goal: CellId) -> SearchTree {
        SearchTree {
            start,
            goal,
            parents: ParentMap::default(),
            levels: FxIndexMap::default(),
            found: false,
        }
    }
    pub fn unreachable(&self) -> bool {
        !self.found
    }
    pub fn level(&self, cell: CellId) -> Option<usize> {
        self.levels.get(&cell).copied()
    }
    /// Cells in the order they were visited, starting with the start cell.
    pub fn visited(&self) -> impl Iterator<Item = CellId> + '_ {
        self.levels.keys().copied()
    }
    /// The start to goal path if the goal was found.
    pub fn path(&self) -> Option<Vec<CellId>> {
        if self.found {
            reconstruct_path(&self.parents, self.start, self.goal)
        } else {
            None
        }
    }
}

/// A traversal over an [Adjacency] list that reports every step to `events`.
pub trait Traversal {
    fn traverse<F>(&self, graph: &Adjacency, start: CellId, goal: CellId, events: F) -> SearchTree
    where
        F: FnMut(TraversalEvent);
}

/// The traversal selected in the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BreadthFirst, Algorithm::DepthFirst];
}

impl Traversal for Algorithm {
    fn traverse<F>(&self, graph: &Adjacency, start: CellId, goal: CellId, events: F) -> SearchTree
    where
        F: FnMut(TraversalEvent),
    {
        match self {
            Algorithm::BreadthFirst => BreadthFirst.traverse(graph, start, goal, events),
            Algorithm::DepthFirst => DepthFirst.traverse(graph, start, goal, events),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::BreadthFirst => write!(f, "breadth-first search"),
            Algorithm::DepthFirst => write!(f, "depth-first search"),
        }
    }
}
