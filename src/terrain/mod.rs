//! The dig site: plots and the grid that holds them.

mod grid;
mod plot;

pub use grid::{Grid, TreasureMap};
pub use plot::Plot;
