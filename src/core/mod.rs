//! Fundamental types: headings, cell readings, grid coordinates.

mod cell;
mod heading;
mod point;

pub use cell::{CellReading, SensorSweep, Topology};
pub use heading::{Heading, RelativeDirection};
pub use point::GridPoint;
