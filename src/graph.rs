use crate::cell::CellId;
use crate::grid::{CellGrid, Direction};
use crate::FxIndexMap;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Neighbour list of a single cell. At most four entries on an orthogonal grid.
pub type Neighbours = SmallVec<[CellId; 4]>;

/// Adjacency list over the open cells of a [CellGrid]. Keys iterate in row-major order and
/// every neighbour list follows [Direction::PRIORITY].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjacency {
    nodes: FxIndexMap<CellId, Neighbours>,
    cell_count: usize,
}

/// Builds the adjacency list of the current wall configuration. Wall cells get no entry and
/// are never listed as a neighbour.
pub fn build_adjacency(grid: &CellGrid) -> Adjacency {
    let mut nodes = FxIndexMap::default();
    for cell in grid.iter().filter(|c| !c.wall) {
        let neighbours = Direction::PRIORITY
            .iter()
            .filter_map(|&dir| grid.neighbour(cell.id, dir))
            .filter(|&n| !grid.is_wall(n))
            .collect::<Neighbours>();
        nodes.insert(cell.id, neighbours);
    }
    debug!(
        "Built adjacency list with {} open cells out of {}",
        nodes.len(),
        grid.len()
    );
    Adjacency {
        nodes,
        cell_count: grid.len(),
    }
}

impl Adjacency {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn contains(&self, id: CellId) -> bool {
        self.nodes.contains_key(&id)
    }
    /// Neighbours of `id`, empty for walls and cells outside the grid.
    pub fn neighbours(&self, id: CellId) -> &[CellId] {
        self.nodes.get(&id).map(|n| n.as_slice()).unwrap_or(&[])
    }
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &[CellId])> {
        self.nodes.iter().map(|(id, n)| (*id, n.as_slice()))
    }
    /// Groups open cells into connected components. Indices are [CellId::index].
    pub fn components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.cell_count);
        for (id, neighbours) in self.iter() {
            for n in neighbours {
                components.union(id.index(), n.index());
            }
        }
        components
    }
    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: CellId, goal: CellId) -> bool {
        if !self.contains(start) || !self.contains(goal) {
            return false;
        }
        self.components().equiv(start.index(), goal.index())
    }
}
