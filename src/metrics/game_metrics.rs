use std::time::{Duration, Instant};

/// Session statistics shown in the header. In-memory only; nothing here is
/// persisted across runs.
pub struct GameMetrics {
    run_start: Instant,
    elapsed: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            run_start: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the elapsed-time reading; called from the render cadence
    pub fn update(&mut self) {
        self.elapsed = self.run_start.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.run_start = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    /// Elapsed time of the current run as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
