use image::DynamicImage;

use crate::error::{Result, SolveError};
use crate::grid::{Cell, GridMap, Point};

/// Converts an image to a map, pixels brighter than `threshold` become open cells
pub fn parse_img(img: &DynamicImage, threshold: u8) -> GridMap {
    let luma = img.to_luma8();
    let width = luma.width() as usize;
    let height = luma.height() as usize;

    let mut cells = vec![vec![Cell::Wall; width]; height];

    for (col, row, p) in luma.enumerate_pixels() {
        cells[row as usize][col as usize] = if p.0[0] > threshold {
            Cell::Open
        } else {
            Cell::Wall
        }
    }

    GridMap {
        rows: height,
        columns: width,
        cells,
    }
}

/// The column of the `skip`-th (0-based) walkable cell in the given row
fn nth_open_col(map: &GridMap, row: usize, skip: usize) -> Option<usize> {
    map.cells[row]
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == Cell::Open)
        .nth(skip)
        .map(|(col, _)| col)
}

/// Picks the start on the first row and the goal on the last row of the map.
///
/// The first `skip` walkable cells of each row are passed over since they usually belong to the
/// frame of the maze rather than its entrance.
pub fn find_endpoints(map: &GridMap, skip: usize) -> Result<(Point, Point)> {
    let last = map
        .rows
        .checked_sub(1)
        .ok_or(SolveError::MissingEndpoint { which: "start" })?;

    let start = nth_open_col(map, 0, skip)
        .map(|col| Point::new(0, col))
        .ok_or(SolveError::MissingEndpoint { which: "start" })?;
    let goal = nth_open_col(map, last, skip)
        .map(|col| Point::new(last, col))
        .ok_or(SolveError::MissingEndpoint { which: "goal" })?;

    log::debug!("start={:?} goal={:?}", start, goal);

    Ok((start, goal))
}

#[cfg(test)]
mod test {

    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_parse_img_threshold() {
        let img = GrayImage::from_fn(3, 2, |x, y| match (x, y) {
            (0, 0) => Luma([128]),
            (1, 0) => Luma([129]),
            (2, 1) => Luma([255]),
            _ => Luma([0]),
        });

        let map = parse_img(&DynamicImage::ImageLuma8(img), 128);

        assert_eq!(map.rows, 2);
        assert_eq!(map.columns, 3);
        assert_eq!(map.get(Point::new(0, 0)), Cell::Wall);
        assert_eq!(map.get(Point::new(0, 1)), Cell::Open);
        assert_eq!(map.get(Point::new(1, 2)), Cell::Open);
        assert_eq!(map.get(Point::new(1, 0)), Cell::Wall);
    }

    #[test]
    fn test_find_endpoints_skips_frame() {
        let map = GridMap::from_samples(&[
            [1u8, 1, 0, 1, 1, 0],
            [0, 0, 0, 1, 0, 0],
            [1, 0, 1, 1, 0, 1],
        ])
        .unwrap();

        assert_eq!(
            find_endpoints(&map, 2).unwrap(),
            (Point::new(0, 3), Point::new(2, 3))
        );
        assert_eq!(
            find_endpoints(&map, 0).unwrap(),
            (Point::new(0, 0), Point::new(2, 0))
        );
    }

    #[test]
    fn test_find_endpoints_missing() {
        let map = GridMap::from_samples(&[[1u8, 1, 1], [0, 1, 0], [0, 1, 0]]).unwrap();

        assert_eq!(
            find_endpoints(&map, 2),
            Err(SolveError::MissingEndpoint { which: "goal" })
        );

        let map = GridMap::from_samples(&[[0u8, 1, 0], [0, 1, 0], [1, 1, 1]]).unwrap();
        assert_eq!(
            find_endpoints(&map, 2),
            Err(SolveError::MissingEndpoint { which: "start" })
        );
    }
}
