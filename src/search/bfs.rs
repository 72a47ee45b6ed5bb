use super::{SearchTree, Traversal, TraversalEvent};
use crate::cell::CellId;
use crate::graph::Adjacency;

/// Level-by-level search that stops as soon as the goal is discovered.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirst;

impl Traversal for BreadthFirst {
    fn traverse<F>(&self, graph: &Adjacency, start: CellId, goal: CellId, events: F) -> SearchTree
    where
        F: FnMut(TraversalEvent),
    {
        bfs(graph, start, goal, events)
    }
}

/// Beginning at `start`, explores `graph` in order of increasing distance, recording the
/// level and parent of every discovered cell. Each discovery is reported to `events` before
/// the next neighbour is considered. Same-level ties follow the neighbour order of the
/// adjacency list.
///
/// The search stops when either:
///
///   * the goal is discovered, or
///   * the frontier is exhausted, in which case [SearchTree::found] stays `false`.
pub fn bfs<F>(graph: &Adjacency, start: CellId, goal: CellId, mut events: F) -> SearchTree
where
    F: FnMut(TraversalEvent),
{
    let mut tree = SearchTree::new(start, goal);
    if !graph.contains(start) {
        return tree;
    }
    tree.levels.insert(start, 0);
    if start == goal {
        tree.found = true;
        return tree;
    }
    let mut frontier = vec![start];
    let mut level = 1;
    'search: while !frontier.is_empty() {
        let mut next = Vec::new();
        for &u in &frontier {
            for &v in graph.neighbours(u) {
                if tree.levels.contains_key(&v) {
                    continue;
                }
                tree.levels.insert(v, level);
                tree.parents.insert(v, u);
                next.push(v);
                events(TraversalEvent::Discovered { cell: v, level });
                if v == goal {
                    tree.found = true;
                    break 'search;
                }
            }
        }
        frontier = next;
        level += 1;
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_adjacency;
    use crate::grid::{CellGrid, GridSize};

    fn discoveries(graph: &Adjacency, start: CellId, goal: CellId) -> (SearchTree, Vec<CellId>) {
        let mut order = Vec::new();
        let tree = bfs(graph, start, goal, |e| order.push(e.cell()));
        (tree, order)
    }

    /// Asserts that the optimal 5 cell solution is found on an open 3x3 grid.
    #[test]
    fn solve_open_problem() {
        let grid = CellGrid::new(GridSize::unchecked(3));
        let graph = build_adjacency(&grid);
        let (tree, order) = discoveries(&graph, CellId(1), CellId(9));
        assert!(tree.found);
        assert_eq!(tree.level(CellId(9)), Some(4));
        assert_eq!(tree.path().unwrap().len(), 5);
        // Right before down, level by level, stopping at the goal.
        assert_eq!(
            order,
            [2, 4, 3, 5, 7, 6, 8, 9].map(CellId).to_vec()
        );
    }

    #[test]
    fn discovery_order_matches_levels() {
        let grid = CellGrid::new(GridSize::unchecked(5));
        let graph = build_adjacency(&grid);
        let mut levels = Vec::new();
        bfs(&graph, CellId(13), CellId(1), |e| {
            if let TraversalEvent::Discovered { level, .. } = e {
                levels.push(level)
            }
        });
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(levels.last(), Some(&4));
    }

    #[test]
    fn walled_off_goal_is_unreachable() {
        //  ___
        // |S# |
        // |#  |
        // |  E|
        //  ___
        let grid = CellGrid::from_rows(&[".#.", "#..", "..."]);
        let graph = build_adjacency(&grid);
        let (tree, order) = discoveries(&graph, CellId(1), CellId(9));
        assert!(tree.unreachable());
        assert!(order.is_empty());
    }

    #[test]
    fn equal_start_goal() {
        let grid = CellGrid::new(GridSize::unchecked(1));
        let graph = build_adjacency(&grid);
        let (tree, order) = discoveries(&graph, CellId(1), CellId(1));
        assert!(tree.found);
        assert!(order.is_empty());
        assert_eq!(tree.path(), Some(vec![CellId(1)]));
    }

    #[test]
    fn wall_start_finds_nothing() {
        let grid = CellGrid::from_rows(&["#.", ".."]);
        let graph = build_adjacency(&grid);
        let (tree, order) = discoveries(&graph, CellId(1), CellId(4));
        assert!(tree.unreachable());
        assert!(order.is_empty());
        assert!(tree.levels.is_empty());
    }
}
