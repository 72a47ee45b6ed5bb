use super::ParentMap;
use crate::cell::CellId;
use crate::grid::CellGrid;
use itertools::Itertools;
use log::warn;
use std::iter;

/// Walks the parent links back from `goal` to `start` and returns the cells in start to goal
/// order. Returns [None] if the chain breaks off before reaching `start`, which means the goal
/// was never reached.
pub fn reconstruct_path(parents: &ParentMap, start: CellId, goal: CellId) -> Option<Vec<CellId>> {
    let mut path = iter::successors(Some(goal), |&cell| {
        if cell == start {
            None
        } else {
            parents.get(&cell).copied()
        }
    })
    // A well-formed parent map is a tree; bound the walk in case it is not.
    .take(parents.len() + 1)
    .collect::<Vec<_>>();
    if path.last() != Some(&start) {
        warn!("Parent links from {} do not lead back to {}", goal, start);
        return None;
    }
    path.reverse();
    Some(path)
}

/// Checks that `path` runs from `start` to `goal` over open cells, each an orthogonal
/// neighbour of the one before.
pub fn is_valid_path(grid: &CellGrid, path: &[CellId], start: CellId, goal: CellId) -> bool {
    if path.first() != Some(&start) || path.last() != Some(&goal) {
        return false;
    }
    if path.iter().any(|&id| !grid.contains(id) || grid.is_wall(id)) {
        return false;
    }
    path.iter()
        .filter_map(|&id| grid.cell(id))
        .tuple_windows()
        .all(|(a, b)| a.is_adjacent(b))
}
