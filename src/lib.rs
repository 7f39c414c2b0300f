#![warn(clippy::disallowed_types)]

pub use error::SolverError;
pub use solver::{solve, solve_with, Solution, SolveOptions};
pub use symbols::*;

pub mod brackets;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod parser_io;
pub mod rewriter;
pub mod solver;
pub mod table_io;
pub mod truth_table;

mod symbols;
