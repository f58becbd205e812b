//! Color assignment for lucky wheel prize segments.
//!
//! New prizes take the first unused color of a curated palette; once the
//! palette runs out a random color is drawn that clashes with neither the
//! existing prizes nor the wheel chrome.

pub mod assign;
pub mod color;
pub mod palette;
pub mod wheel;

pub use assign::{AssignError, ColorAssigner};
pub use color::{Color, ColorParseError};
pub use palette::{DEFAULT_COLORS, EXCLUDED_COLORS, Palette, PaletteError};
pub use wheel::{Prize, Wheel};
