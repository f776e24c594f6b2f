use image::{Rgb, RgbImage};

use crate::grid::{Cell, GridMap, Point};

pub const OPEN_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const WALL_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
pub const PATH_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Draws the map with one pixel per cell: open cells white, walls black.
pub fn render_grid(map: &GridMap) -> RgbImage {
    RgbImage::from_fn(map.columns as u32, map.rows as u32, |x, y| {
        match map.cells[y as usize][x as usize] {
            Cell::Open => OPEN_COLOR,
            Cell::Wall => WALL_COLOR,
        }
    })
}

/// Draws the map like [`render_grid`] and paints every cell of `path` in `color` on top.
pub fn render_path(map: &GridMap, path: &[Point], color: Rgb<u8>) -> RgbImage {
    let mut img = render_grid(map);

    for point in path {
        img.put_pixel(point.col as u32, point.row as u32, color);
    }

    img
}
