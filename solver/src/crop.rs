//! Removes the blank margin around a maze.
//!
//! A row or column is treated as margin when at least `blank_ratio` of its cells are walkable.
//! Only the outer margin is removed, blank rows or columns inside the maze are kept.

use std::ops::RangeInclusive;

use crate::error::{Result, SolveError};
use crate::grid::{Cell, GridMap};

pub const DEFAULT_BLANK_RATIO: f64 = 0.9;

/// Inclusive index ranges of the rows and columns that make up the maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropBox {
    pub row_range: RangeInclusive<usize>,
    pub col_range: RangeInclusive<usize>,
}

impl CropBox {
    pub fn rows(&self) -> usize {
        self.row_range.end() - self.row_range.start() + 1
    }

    pub fn columns(&self) -> usize {
        self.col_range.end() - self.col_range.start() + 1
    }
}

fn is_blank(open: usize, total: usize, blank_ratio: f64) -> bool {
    open as f64 / total as f64 >= blank_ratio
}

/// First and last index for which `keep` holds
fn span(len: usize, mut keep: impl FnMut(usize) -> bool) -> Option<RangeInclusive<usize>> {
    let first = (0..len).find(|&i| keep(i))?;
    let last = (0..len).rev().find(|&i| keep(i))?;
    Some(first..=last)
}

/// Computes the bounding box of the rows and columns that are not blank, `None` if everything is.
pub fn bounding_box(map: &GridMap, blank_ratio: f64) -> Option<CropBox> {
    let row_open: Vec<usize> = map
        .cells
        .iter()
        .map(|row| row.iter().filter(|c| **c == Cell::Open).count())
        .collect();

    let mut col_open = vec![0usize; map.columns];
    for row in &map.cells {
        for (col, cell) in row.iter().enumerate() {
            if *cell == Cell::Open {
                col_open[col] += 1;
            }
        }
    }

    let row_range = span(map.rows, |r| !is_blank(row_open[r], map.columns, blank_ratio))?;
    let col_range = span(map.columns, |c| !is_blank(col_open[c], map.rows, blank_ratio))?;

    Some(CropBox {
        row_range,
        col_range,
    })
}

/// Returns the part of the map inside its [`bounding_box`].
///
/// Fails with [`SolveError::EmptyMaze`] when every row or every column is blank.
pub fn crop_whitespace(map: &GridMap, blank_ratio: f64) -> Result<GridMap> {
    let crop = bounding_box(map, blank_ratio).ok_or(SolveError::EmptyMaze)?;

    log::debug!(
        "cropping {}x{} map to rows {:?} and columns {:?}",
        map.rows,
        map.columns,
        crop.row_range,
        crop.col_range
    );

    let cells = map.cells[crop.row_range.clone()]
        .iter()
        .map(|row| row[crop.col_range.clone()].to_vec())
        .collect();

    Ok(GridMap {
        rows: crop.rows(),
        columns: crop.columns(),
        cells,
    })
}

#[cfg(test)]
mod test {

    use super::*;
    use crate::grid::Point;

    /// A small maze surrounded by a white margin
    fn create_framed_maze() -> GridMap {
        let maze = [
            [0u8, 0, 1, 0, 0, 0],
            [0, 1, 1, 1, 1, 0],
            [0, 1, 0, 0, 1, 0],
            [0, 1, 1, 0, 1, 0],
            [0, 0, 0, 1, 1, 0],
            [0, 0, 0, 1, 0, 0],
        ];

        let mut map = GridMap::new(10, 11);
        for (r, row) in maze.iter().enumerate() {
            for (c, sample) in row.iter().enumerate() {
                map.cells[r + 2][c + 3] = Cell::from_sample(*sample);
            }
        }
        map
    }

    #[test]
    fn test_crop_removes_margin() {
        let map = create_framed_maze();

        let crop = bounding_box(&map, DEFAULT_BLANK_RATIO).unwrap();
        assert_eq!(crop.row_range, 2..=7);
        assert_eq!(crop.col_range, 3..=8);

        let cropped = crop_whitespace(&map, DEFAULT_BLANK_RATIO).unwrap();
        assert_eq!(cropped.rows, 6);
        assert_eq!(cropped.columns, 6);
        assert_eq!(cropped.get(Point::new(0, 2)), Cell::Open);
        assert_eq!(cropped.get(Point::new(0, 0)), Cell::Wall);
    }

    #[test]
    fn test_crop_is_idempotent() {
        let once = crop_whitespace(&create_framed_maze(), DEFAULT_BLANK_RATIO).unwrap();
        let twice = crop_whitespace(&once, DEFAULT_BLANK_RATIO).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_interior_blank_rows_are_kept() {
        let mut map = GridMap::new(5, 4);
        map.cells[1] = vec![Cell::Wall; 4];
        map.cells[3] = vec![Cell::Wall; 4];

        let cropped = crop_whitespace(&map, DEFAULT_BLANK_RATIO).unwrap();

        assert_eq!(cropped.rows, 3);
        assert_eq!(cropped.columns, 4);
        assert_eq!(cropped.cells[1], vec![Cell::Open; 4]);
    }

    #[test]
    fn test_blank_map_is_empty_maze() {
        let map = GridMap::new(10, 10);

        assert_eq!(bounding_box(&map, DEFAULT_BLANK_RATIO), None);
        assert_eq!(
            crop_whitespace(&map, DEFAULT_BLANK_RATIO),
            Err(SolveError::EmptyMaze)
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // exactly 90% walkable counts as blank
        let mut map = GridMap::new(10, 10);
        map.cells[4][4] = Cell::Wall;

        assert_eq!(
            crop_whitespace(&map, DEFAULT_BLANK_RATIO),
            Err(SolveError::EmptyMaze)
        );

        // row 4 and column 4 drop to 80%, row 5 and column 5 stay at 90%
        map.cells[4][5] = Cell::Wall;
        map.cells[5][4] = Cell::Wall;
        let cropped = crop_whitespace(&map, DEFAULT_BLANK_RATIO).unwrap();
        assert_eq!(cropped.rows, 1);
        assert_eq!(cropped.columns, 1);
        assert_eq!(cropped.cells, vec![vec![Cell::Wall]]);
    }
}
