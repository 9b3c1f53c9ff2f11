//! Pure constructors from caller parameters to descriptor trees.
//!
//! Nothing here talks to the host. Equal inputs give byte-identical output.

pub mod color;
pub mod effects;
pub mod gradient;
pub mod paint;
pub mod path;
pub mod vocab;

pub use color::rgb;
pub use gradient::{location_to_fixed, ColorStop, OpacityStop};
pub use vocab::EnumTable;
