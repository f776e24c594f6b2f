use crate::error::{Result, SolveError};
use crate::find::{MapStorage, MapTrait, NodeReference};
use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Wall,
    Open,
}

impl Cell {
    /// Interprets a binary sample, anything nonzero is walkable
    pub fn from_sample(sample: u8) -> Self {
        if sample == 0 {
            Cell::Wall
        } else {
            Cell::Open
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Cell::Wall => "X",
                Cell::Open => " ",
            }
        )
    }
}

/// A MapTrait implementation that uses a rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMap {
    pub rows: usize,
    pub columns: usize,
    pub cells: Vec<Vec<Cell>>,
}

impl GridMap {
    /// Creates a map of the given size where every cell is open
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![vec![Cell::Open; columns]; rows],
        }
    }

    /// Builds a map from rows of 0/1 samples (0 = wall, anything else = open).
    pub fn from_samples<S: AsRef<[u8]>>(samples: &[S]) -> Result<Self> {
        let rows = samples.len();
        let columns = samples.first().map(|r| r.as_ref().len()).unwrap_or(0);

        if rows == 0 || columns == 0 {
            return Err(SolveError::InvalidGrid(format!(
                "expected at least 1x1 samples, got {}x{}",
                rows, columns
            )));
        }

        let mut cells = Vec::with_capacity(rows);
        for (row, samples) in samples.iter().enumerate() {
            let samples = samples.as_ref();
            if samples.len() != columns {
                return Err(SolveError::InvalidGrid(format!(
                    "row {} has {} samples, expected {}",
                    row,
                    samples.len(),
                    columns
                )));
            }
            cells.push(samples.iter().copied().map(Cell::from_sample).collect());
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    pub fn get(&self, point: Point) -> Cell {
        self.cells[point.row][point.col]
    }

    /// True if the point is inside the map and walkable
    pub fn is_open(&self, point: Point) -> bool {
        self.is_valid(point) && self.get(point) == Cell::Open
    }

    /// Scales the map by the given factor, i.e. to make it twice as large, pass 2.
    /// Interpolates the cells by repeating the existing cells in the new grid.
    pub fn scale_up(&mut self, factor: usize) {
        let mut new_cells = vec![vec![Cell::default(); self.columns * factor]; self.rows * factor];

        for row in 0..self.rows {
            for col in 0..self.columns {
                for r in 0..factor {
                    for c in 0..factor {
                        new_cells[row * factor + r][col * factor + c] = self.cells[row][col];
                    }
                }
            }
        }

        self.rows *= factor;
        self.columns *= factor;
        self.cells = new_cells;
    }
}

/// A MapStorage that uses a rectangular grid of cells (a vec in a vec)
#[derive(Debug)]
pub struct CellStorage<T>(Vec<Vec<T>>);

impl<T: Copy + 'static> MapStorage<T> for CellStorage<T> {
    type Reference = Point;

    fn get(&self, node: Self::Reference) -> T {
        self.0[node.row][node.col]
    }

    fn get_mut(&mut self, node: Self::Reference) -> &mut T {
        &mut self.0[node.row][node.col]
    }
}

impl<T: Display> Display for CellStorage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.0 {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// A cell coordinate. Ordered by row first, then column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two points
    pub fn manhattan(&self, other: &Point) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl NodeReference for Point {}

impl Display for GridMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl MapTrait for GridMap {
    type Reference = Point;
    type Storage<T: Default + Copy + Clone + 'static> = CellStorage<T>;

    fn is_valid(&self, node: Self::Reference) -> bool {
        node.row < self.rows && node.col < self.columns
    }

    /// Orthogonal neighbours in the order right, down, left, up. Only open cells are returned.
    fn neighbors_of(&self, node: Self::Reference) -> impl Iterator<Item = Self::Reference> {
        let mut points = Vec::with_capacity(4);

        if node.col + 1 < self.columns {
            points.push(Point {
                row: node.row,
                col: node.col + 1,
            });
        }
        if node.row + 1 < self.rows {
            points.push(Point {
                row: node.row + 1,
                col: node.col,
            });
        }
        if node.col > 0 {
            points.push(Point {
                row: node.row,
                col: node.col - 1,
            });
        }
        if node.row > 0 {
            points.push(Point {
                row: node.row - 1,
                col: node.col,
            });
        }

        // filter to only keep walkable cells
        points.retain(|p| self.cells[p.row][p.col] == Cell::Open);

        points.into_iter()
    }

    fn estimate(&self, from: Self::Reference, to: Self::Reference) -> usize {
        from.manhattan(&to)
    }

    fn create_storage<T: Default + Copy + Clone + 'static>(&self) -> Self::Storage<T> {
        CellStorage(vec![vec![Default::default(); self.columns]; self.rows])
    }
}
