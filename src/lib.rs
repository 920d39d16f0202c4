//! Prepares the algorithm icon set from a single sprite sheet.
//!
//! The sheet is recolored in place (see [`recolor`]) and then cut into a
//! fixed 4×8 grid of icons (see [`grid`] and [`slicer`]).

pub mod grid;
pub mod recolor;
pub mod slicer;
