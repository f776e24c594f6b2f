//! Error types for the maze solver

use thiserror::Error;

use crate::grid::Point;

/// Every failure the solver can report. Callers are expected to match on the variant rather than
/// the message, e.g. to tell an empty image apart from an unsolvable maze.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("The maze seems to be empty or invalid. Please check the input image.")]
    EmptyMaze,

    #[error("Invalid endpoint ({}, {}): {reason}", .point.row, .point.col)]
    InvalidEndpoint { point: Point, reason: &'static str },

    #[error("No path found from ({}, {}) to ({}, {}).", .start.row, .start.col, .goal.row, .goal.col)]
    NoPath { start: Point, goal: Point },

    #[error("Could not find a valid {which} position in the maze.")]
    MissingEndpoint { which: &'static str },

    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SolveError>;
