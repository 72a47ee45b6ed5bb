use super::{SearchTree, Traversal, TraversalEvent};
use crate::cell::CellId;
use crate::graph::Adjacency;

/// Recursive search following the neighbour order of the adjacency list.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirst;

impl Traversal for DepthFirst {
    fn traverse<F>(&self, graph: &Adjacency, start: CellId, goal: CellId, events: F) -> SearchTree
    where
        F: FnMut(TraversalEvent),
    {
        dfs(graph, start, goal, events)
    }
}

struct DepthFirstRun<'a, F> {
    graph: &'a Adjacency,
    tree: SearchTree,
    events: F,
}

impl<F> DepthFirstRun<'_, F>
where
    F: FnMut(TraversalEvent),
{
    fn visit(&mut self, cell: CellId, depth: usize) {
        self.tree.levels.insert(cell, depth);
        (self.events)(TraversalEvent::Visited { cell, depth });
        if cell == self.tree.goal {
            self.tree.found = true;
            return;
        }
        let graph = self.graph;
        for &next in graph.neighbours(cell) {
            // Once the goal is found every pending branch unwinds without further work.
            if self.tree.found {
                return;
            }
            if self.tree.levels.contains_key(&next) {
                continue;
            }
            self.tree.parents.insert(next, cell);
            self.visit(next, depth + 1);
        }
        if !self.tree.found {
            (self.events)(TraversalEvent::Backtracked { cell });
        }
    }
}

/// Beginning at `start`, visits neighbours depth first, marking each cell before descending
/// into it. The first time the goal is visited the whole search stops. Every cell whose
/// subtree was exhausted without reaching the goal is reported as
/// [TraversalEvent::Backtracked]; cells on the branch that led to the goal never are.
pub fn dfs<F>(graph: &Adjacency, start: CellId, goal: CellId, events: F) -> SearchTree
where
    F: FnMut(TraversalEvent),
{
    let mut run = DepthFirstRun {
        graph,
        tree: SearchTree::new(start, goal),
        events,
    };
    if graph.contains(start) {
        run.visit(start, 0);
    }
    run.tree
}
