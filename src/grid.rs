use crate::cell::{Cell, CellId, CellState};
use crate::error::SimulationError;
use core::fmt;
use grid_util::point::Point;

/// Side length of a square grid, restricted to the sizes the size selector offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize(usize);

impl GridSize {
    pub const ALLOWED: [usize; 4] = [8, 10, 15, 20];

    pub fn new(size: usize) -> Result<GridSize, SimulationError> {
        if Self::ALLOWED.contains(&size) {
            Ok(GridSize(size))
        } else {
            Err(SimulationError::InvalidGridSize(size))
        }
    }
    /// Bypasses the selector restriction. Useful for small hand-made grids.
    pub fn unchecked(size: usize) -> GridSize {
        GridSize(size)
    }
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for GridSize {
    fn default() -> GridSize {
        GridSize(Self::ALLOWED[0])
    }
}

/// The four orthogonal directions in neighbour priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const PRIORITY: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Offset in ([Point::x], [Point::y]) = (column, row).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }
}

/// Square matrix of [Cell]s stored row-major. Cells are created once and then mutated in
/// place until the grid is rebuilt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(size: GridSize) -> CellGrid {
        let size = size.get();
        let cells = (0..size * size)
            .map(|ix| Cell::new(CellId::from_index(ix), ix / size, ix % size))
            .collect();
        CellGrid { size, cells }
    }
    /// Builds a grid from rows of characters where `#` marks a wall. Rows must all be as
    /// long as there are rows.
    pub fn from_rows(rows: &[&str]) -> CellGrid {
        let mut grid = CellGrid::new(GridSize::unchecked(rows.len()));
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                if c == '#' {
                    if let Some(id) = grid.id_at(row, col) {
                        grid.set_wall(id, true);
                    }
                }
            }
        }
        grid
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn contains(&self, id: CellId) -> bool {
        id.0 >= 1 && id.0 <= self.cells.len()
    }
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        if self.contains(id) {
            self.cells.get(id.index())
        } else {
            None
        }
    }
    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        if self.contains(id) {
            self.cells.get_mut(id.index())
        } else {
            None
        }
    }
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.id_at(row, col).and_then(|id| self.cell(id))
    }
    pub fn id_at(&self, row: usize, col: usize) -> Option<CellId> {
        if row < self.size && col < self.size {
            Some(CellId::from_index(row * self.size + col))
        } else {
            None
        }
    }
    pub fn id_at_point(&self, point: Point) -> Option<CellId> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        self.id_at(point.y as usize, point.x as usize)
    }
    /// The cell one step from `id` in `dir`, if it lies on the grid.
    pub fn neighbour(&self, id: CellId, dir: Direction) -> Option<CellId> {
        let cell = self.cell(id)?;
        let (dx, dy) = dir.offset();
        let p = cell.point();
        self.id_at_point(Point::new(p.x + dx, p.y + dy))
    }
    pub fn is_wall(&self, id: CellId) -> bool {
        self.cell(id).map_or(false, |c| c.wall)
    }
    /// Sets the wall flag and the matching display state.
    pub fn set_wall(&mut self, id: CellId, wall: bool) {
        if let Some(cell) = self.cell_mut(id) {
            cell.wall = wall;
            cell.state = if wall {
                CellState::Wall
            } else {
                CellState::Unvisited
            };
        }
    }
    pub fn paint(&mut self, id: CellId, state: CellState) {
        if let Some(cell) = self.cell_mut(id) {
            cell.state = state;
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }
    pub fn walls(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().filter(|c| c.wall).map(|c| c.id)
    }
}

impl fmt::Display for CellGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line = row.iter().map(|c| c.state.symbol()).collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
