// lib.rs - Conway's Game of Life on a fixed-size toroidal grid
//
// `Field` holds one generation and answers wrapped neighbour queries.
// `Life` owns the current/next pair and steps them with B3/S23.

pub mod cycle;
pub mod error;
pub mod field;
pub mod life;
pub mod patterns;

pub use cycle::CycleDetector;
pub use error::{LifeError, Malformed, Result};
pub use field::{ALIVE_GLYPH, DEAD_GLYPH, Field, Glyphs, Rows};
pub use life::{Life, Snapshot};
pub use patterns::{PATTERNS, Pattern};
