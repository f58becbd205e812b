use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Default prize colors, in assignment order.
/// Once all of them are taken new prizes get random colors.
pub const DEFAULT_COLORS: [&str; 51] = [
    "#f44336", // red
    "#ff9800", // orange
    "#ffd600", // yellow
    "#4caf50", // green
    "#00bcd4", // cyan
    "#2196f3", // blue
    "#9c27b0", // purple
    "#e91e63", // pink
    "#8bc34a", // light green
    "#ffc107", // amber
    "#009688", // teal
    "#3f51b5", // indigo
    "#ff5722", // deep orange
    "#cddc39", // lime
    "#607d8b", // blue grey
    "#795548", // brown
    "#e57373", // light red
    "#ffb74d", // light orange
    "#fff176", // light yellow
    "#81c784", // light green
    "#4dd0e1", // light cyan
    "#64b5f6", // light blue
    "#ba68c8", // light purple
    "#f06292", // light pink
    "#aed581", // pale green
    "#ffd54f", // light amber
    "#4db6ac", // light teal
    "#7986cb", // light indigo
    "#ff8a65", // light deep orange
    "#afb42b", // dark lime
    "#90a4ae", // light blue grey
    "#bcaaa4", // light brown
    "#d32f2f", // dark red
    "#f57c00", // dark orange
    "#fbc02d", // dark yellow
    "#388e3c", // dark green
    "#00838f", // dark cyan
    "#1976d2", // dark blue
    "#6a1b9a", // dark purple
    "#ad1457", // dark pink
    "#689f38", // dark light green
    "#ffa000", // dark amber
    "#00695c", // dark teal
    "#283593", // dark indigo
    "#bf360c", // dark deep orange
    "#37474f", // dark blue grey
    "#4e342e", // dark brown
    "#aeea00", // neon yellow green
    "#00e676", // neon green
    "#00b8d4", // neon blue
    "#d500f9", // neon purple
];

/// Colors used by the wheel itself; never handed out to prizes.
pub const EXCLUDED_COLORS: [&str; 5] = [
    "#ffffff", // white
    "#000000", // wheel border
    "#d93b3b", // pointer
    "#333333", // wheel background
    "#ffeb3b", // win highlight
];

#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("invalid palette JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Palette configuration: ordered prize colors plus the reserved set.
///
/// Either field may be omitted from JSON, in which case the built-in list is used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_colors")]
    pub colors: Vec<Color>,
    #[serde(default = "excluded_colors")]
    pub excluded: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: default_colors(),
            excluded: excluded_colors(),
        }
    }
}

impl Palette {
    pub fn from_json(text: &str) -> Result<Self, PaletteError> {
        Ok(serde_json::from_str(text)?)
    }
}

fn builtin(list: &[&str]) -> Vec<Color> {
    list.iter().filter_map(|s| s.parse().ok()).collect()
}

fn default_colors() -> Vec<Color> {
    builtin(&DEFAULT_COLORS)
}

fn excluded_colors() -> Vec<Color> {
    builtin(&EXCLUDED_COLORS)
}
