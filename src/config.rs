use std::time::Duration;

pub const WIDTH: u32 = 900;
pub const HEIGHT: u32 = 950;

pub const CELL_SIZE: u32 = 50;
pub const GRID_COLS: i32 = 16;
pub const GRID_ROWS: i32 = 16;

// The playing field sits inset from the window edge; the strip left under it
// holds the score/length text.
pub const GRID_OFFSET: u32 = 50;

pub const FOOD_ICON_PATH: &str = "assets/apple.png";

/// Difficulty selected at startup. Only the tick interval depends on it.
pub const DIFFICULTY: &str = "Medium";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Unknown names fall back to Easy.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// Time between committed simulation ticks.
    pub fn tick_interval(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(500),
            Difficulty::Medium => Duration::from_millis(300),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }
}
