use std::time::Duration;

/// Tick interval per speed level, in milliseconds. Index 0 is the slowest.
const TICK_INTERVALS_MS: [u64; 9] = [450, 400, 350, 300, 250, 200, 150, 120, 80];

/// Game speed as an index into the fixed interval table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed {
    index: usize,
}

impl Speed {
    const DEFAULT_INDEX: usize = 2;

    /// Build from the user-facing 1-9 level, clamped into range
    pub fn from_level(level: u8) -> Self {
        let level = level.clamp(1, TICK_INTERVALS_MS.len() as u8) as usize;
        Self { index: level - 1 }
    }

    /// Adjust by the given number of steps, clamped to the table bounds
    pub fn adjust(&mut self, steps: i32) {
        let max = (TICK_INTERVALS_MS.len() - 1) as i32;
        self.index = (self.index as i32 + steps).clamp(0, max) as usize;
    }

    /// The tick interval this speed selects
    pub fn interval(&self) -> Duration {
        Duration::from_millis(TICK_INTERVALS_MS[self.index])
    }

    /// User-facing level, 1 through 9
    pub fn level(&self) -> u8 {
        self.index as u8 + 1
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self {
            index: Self::DEFAULT_INDEX,
        }
    }
}
