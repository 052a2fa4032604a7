pub mod cover;
pub mod hull;
pub mod input_error;
pub mod intersect;
pub mod parse;
pub mod span;
pub mod tile;
pub mod union;
