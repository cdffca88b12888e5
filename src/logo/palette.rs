//! Brand colors and canvas geometry shared by every logo variant

use serde::{Deserialize, Serialize};

pub const CANVAS_WIDTH: u32 = 200;
pub const CANVAS_HEIGHT: u32 = 200;

/// Center and radius of the circular badge and its clip region
pub const BADGE_CENTER: (u32, u32) = (100, 100);
pub const BADGE_RADIUS: u32 = 90;

/// Off-white used for the shaded half of the snow cap
pub const SNOW_SHADE: &str = "#e0e0e0";

/// Purple palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub dark: String,
    pub light: String,
    pub white: String,
    /// Darker purple for shadowed faces
    pub shadow: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dark: "#5b1a96".to_string(),
            light: "#a866e2".to_string(),
            white: "#ffffff".to_string(),
            shadow: "#3a0e66".to_string(),
        }
    }
}
