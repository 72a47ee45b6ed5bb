use core::fmt;
use grid_util::point::Point;

/// Identifier of a cell. Ids are assigned row-major starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub usize);

impl CellId {
    /// Zero-based index of the cell in row-major storage.
    pub fn index(self) -> usize {
        self.0 - 1
    }
    pub fn from_index(ix: usize) -> CellId {
        CellId(ix + 1)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a cell currently looks like. Each state maps to the CSS class the front end
/// colours the cell with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Unvisited,
    Wall,
    /// Discovered by breadth-first search or visited by depth-first search.
    Frontier,
    /// Depth-first search exhausted this cell's subtree without finding the destination.
    Backtracked,
    Path,
    /// Start or destination.
    Endpoint,
}

impl CellState {
    pub fn class_name(self) -> &'static str {
        match self {
            CellState::Unvisited => "white",
            CellState::Wall => "grey",
            CellState::Frontier => "green",
            CellState::Backtracked => "black",
            CellState::Path => "orange",
            CellState::Endpoint => "yellow",
        }
    }

    /// Single character used by the text rendering of a grid.
    pub fn symbol(self) -> char {
        match self {
            CellState::Unvisited => '.',
            CellState::Wall => '#',
            CellState::Frontier => 'o',
            CellState::Backtracked => 'x',
            CellState::Path => '*',
            CellState::Endpoint => '@',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub id: CellId,
    pub row: usize,
    pub col: usize,
    pub wall: bool,
    pub state: CellState,
}

impl Cell {
    pub fn new(id: CellId, row: usize, col: usize) -> Cell {
        Cell {
            id,
            row,
            col,
            wall: false,
            state: CellState::Unvisited,
        }
    }
    /// Position as a [Point] with `x` the column and `y` the row.
    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
    /// Number of orthogonal steps between two cells when no walls are in the way.
    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}
