//! Solves mazes drawn as black and white images.
//!
//! The pipeline crops the blank margin off a binary grid ([`crop`]), runs an A* search between two
//! walkable cells ([`find`]) and paints the resulting path onto an RGB copy of the grid
//! ([`render`]). Decoding images and picking the endpoints live in [`util`].

pub mod config;
pub mod crop;
pub mod error;
pub mod find;
pub mod grid;
pub mod render;
pub mod util;

use image::RgbImage;

pub use config::SolverConfig;
pub use error::{Result, SolveError};
pub use find::{
    find_path, MapStorage, MapTrait, PathFinder, PathFinderState, PathResult, Visited,
    VisitedItem,
};
pub use grid::{Cell, CellStorage, GridMap, Point};

/// Everything produced by [`solve`]
#[derive(Debug)]
pub struct Solution {
    /// The map after the blank margin was removed, all points refer to this map
    pub maze: GridMap,
    pub result: PathResult<Point>,
    pub image: RgbImage,
}

/// Crops `map`, picks start and goal on its first and last row, finds a shortest path between
/// them and renders it.
pub fn solve(map: &GridMap, config: &SolverConfig) -> Result<Solution> {
    config.validate()?;

    let maze = crop::crop_whitespace(map, config.blank_ratio)?;
    log::info!("cropped maze dimensions: {}x{}", maze.rows, maze.columns);

    let (start, goal) = util::find_endpoints(&maze, config.endpoint_skip)?;
    let result = find_path(&maze, start, goal)?;
    log::info!(
        "found path from {:?} to {:?} with {} steps",
        start,
        goal,
        result.total_cost
    );

    let image = render::render_path(&maze, &result.path, config.path_color());

    Ok(Solution {
        maze,
        result,
        image,
    })
}
