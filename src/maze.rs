//! Maze generation - a randomized depth-first backtracker over the odd
//! lattice, producing a perfect maze (exactly one path between any two
//! open cells). Carving is iterative, with an explicit stack, so large
//! grids cannot blow the call stack.

use std::fmt;

/// One cell of the occupancy grid.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Wall,
    Open,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MazeError {
    /// Dimensions must be odd and at least 3.
    InvalidDimension { width: usize, height: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => {
                write!(f, "invalid maze dimensions {width}x{height} - both must be odd and >= 3")
            }
        }
    }
}

/// The occupancy grid. Immutable once generated.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Generate a maze via randomized backtracking, carving corridors one
    /// cell wide with walls in between. The border stays solid, except the
    /// entrance near the top-left and the exit near the bottom-right corner.
    pub fn generate(width: usize, height: usize, seed: u64) -> Result<Self, MazeError> {
        if width < 3 || height < 3 || width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }

        let rng = fastrand::Rng::with_seed(seed);
        let mut cells = vec![Cell::Wall; width * height];
        let at = |x: usize, y: usize| y * width + x;

        // Each frame keeps its own shuffled direction order and a cursor
        // into it, mirroring the visitation order of the recursive carve.
        cells[at(1, 1)] = Cell::Open;
        let mut stack = vec![CarveFrame::new(1, 1, &rng)];
        while let Some(frame) = stack.last_mut() {
            let (x, y) = (frame.x, frame.y);
            let mut pushed = None;
            while frame.next < frame.dirs.len() {
                let (dx, dy) = frame.dirs[frame.next];
                frame.next += 1;
                let nx = (x as i64) + (dx as i64);
                let ny = (y as i64) + (dy as i64);
                // candidates must stay strictly inside the border
                if nx <= 0 || ny <= 0 || nx >= (width as i64) - 1 || ny >= (height as i64) - 1 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if cells[at(nx, ny)] == Cell::Wall {
                    // carve the connecting cell, then the neighbor itself
                    cells[at((x + nx) / 2, (y + ny) / 2)] = Cell::Open;
                    cells[at(nx, ny)] = Cell::Open;
                    pushed = Some(CarveFrame::new(nx, ny, &rng));
                    break;
                }
            }
            match pushed {
                Some(f) => stack.push(f),
                None => {
                    stack.pop();
                }
            }
        }

        // entrance and exit openings through the border
        cells[at(1, 0)] = Cell::Open;
        cells[at(width - 2, height - 1)] = Cell::Open;

        Ok(Self { width, height, cells })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at (x, y), or `None` when outside the grid.
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            Some(self.cells[(y as usize) * self.width + (x as usize)])
        } else {
            None
        }
    }

    /// True only for in-bounds wall cells - a ray leaving the grid hits nothing.
    #[inline]
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(Cell::Wall)
    }

    /// True only for in-bounds open cells - actors cannot leave the grid.
    #[inline]
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(Cell::Open)
    }

    /// Grid coordinates of the entrance opening.
    #[inline]
    pub fn entrance(&self) -> (usize, usize) {
        (1, 0)
    }

    /// Grid coordinates of the exit opening.
    #[inline]
    pub fn exit(&self) -> (usize, usize) {
        (self.width - 2, self.height - 1)
    }
}

#[cfg(test)]
impl Grid {
    /// Test helper - builds a grid from rows of '#' (wall) and '.' (open).
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width);
            for ch in row.chars() {
                cells.push(if ch == '#' { Cell::Wall } else { Cell::Open });
            }
        }
        Self { width, height, cells }
    }
}

//------------------
//  Internal stuff

const CARVE_DIRS: [(i32, i32); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

struct CarveFrame {
    x: usize,
    y: usize,
    dirs: [(i32, i32); 4],
    next: usize,
}

impl CarveFrame {
    fn new(x: usize, y: usize, rng: &fastrand::Rng) -> Self {
        let mut dirs = CARVE_DIRS;
        rng.shuffle(&mut dirs);
        Self { x, y, dirs, next: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_open(grid: &Grid) -> usize {
        let mut count = 0;
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                if grid.is_open(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Flood fill over open cells, 4-directional, starting at (1,1).
    fn count_reachable(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.width() * grid.height()];
        let mut stack = vec![(1i32, 1i32)];
        seen[grid.width() + 1] = true;
        let mut count = 0;
        while let Some((x, y)) = stack.pop() {
            count += 1;
            for (dx, dy) in [(0, -1), (1, 0), (0, 1), (-1, 0)] {
                let (nx, ny) = (x + dx, y + dy);
                if grid.is_open(nx, ny) {
                    let idx = (ny as usize) * grid.width() + (nx as usize);
                    if !seen[idx] {
                        seen[idx] = true;
                        stack.push((nx, ny));
                    }
                }
            }
        }
        count
    }

    #[test]
    fn rejects_invalid_dimensions() {
        for (w, h) in [(2, 5), (5, 2), (4, 4), (1, 1), (0, 47), (47, 46)] {
            let result = Grid::generate(w, h, 1);
            assert_eq!(result.err(), Some(MazeError::InvalidDimension { width: w, height: h }));
        }
    }

    #[test]
    fn border_is_solid_except_two_openings() {
        for seed in 0..5 {
            let grid = Grid::generate(47, 47, seed).unwrap();
            let (w, h) = (grid.width() as i32, grid.height() as i32);
            let mut openings = vec![];
            for x in 0..w {
                for y in [0, h - 1] {
                    if grid.is_open(x, y) {
                        openings.push((x, y));
                    }
                }
            }
            for y in 1..h - 1 {
                for x in [0, w - 1] {
                    if grid.is_open(x, y) {
                        openings.push((x, y));
                    }
                }
            }
            openings.sort();
            assert_eq!(openings, vec![(1, 0), (w - 2, h - 1)]);
        }
    }

    #[test]
    fn every_open_cell_is_reachable_from_start() {
        for (w, h) in [(3, 3), (5, 9), (47, 47)] {
            let grid = Grid::generate(w, h, 42).unwrap();
            assert_eq!(count_reachable(&grid), count_open(&grid));
        }
    }

    #[test]
    fn carved_cells_form_a_spanning_tree() {
        // a spanning tree of n lattice nodes has n-1 connecting corridors,
        // so open count = 2n - 1, plus the entrance and exit openings
        for (w, h) in [(3, 3), (5, 5), (9, 13), (47, 47)] {
            let grid = Grid::generate(w, h, 7).unwrap();
            let n = ((w - 1) / 2) * ((h - 1) / 2);
            assert_eq!(count_open(&grid), 2 * n - 1 + 2);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let a = Grid::generate(47, 47, 12345).unwrap();
        let b = Grid::generate(47, 47, 12345).unwrap();
        assert_eq!(a.cells, b.cells);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = Grid::generate(47, 47, 1).unwrap();
        let b = Grid::generate(47, 47, 2).unwrap();
        assert_ne!(a.cells, b.cells);
    }

    #[test]
    fn out_of_bounds_is_neither_wall_nor_open() {
        let grid = Grid::generate(5, 5, 0).unwrap();
        assert_eq!(grid.cell(-1, 0), None);
        assert_eq!(grid.cell(0, 5), None);
        assert!(!grid.is_wall(-1, -1));
        assert!(!grid.is_open(5, 5));
    }
}
