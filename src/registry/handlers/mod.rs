pub mod adjustments;
pub mod advanced;
pub mod common;
pub mod document;
pub mod filters;
pub mod generative;
pub mod painting;
pub mod query;
pub mod raw;
pub mod selection;
pub mod shapes;
pub mod styles;
pub mod transforms;
