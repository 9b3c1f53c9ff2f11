pub mod color;
pub mod geometry;
pub mod workspace;

pub use color::RgbColor;
pub use geometry::{Bounds, Point};
pub use workspace::{Document, Layer, LayerKind, Workspace};
