/// Game tuning knobs, gathered in one place so tests can build
/// deterministic variants (tiny grids, forced coconut spawns).

use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Milliseconds between logic ticks at the start of a session.
    pub tick_start_ms: u64,
    /// Floor for the tick interval — the game never gets faster than this.
    pub tick_min_ms: u64,
    /// How much each coconut shaves off the tick interval.
    pub tick_step_ms: u64,
    pub enemy_count: usize,
    /// Enemies step once every this many ticks.
    pub enemy_tick_interval: u64,
    /// Chance that eating an apple spawns a coconut (when none is out).
    pub coconut_chance: f64,
    pub score_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            tick_start_ms: 150,
            tick_min_ms: 80,
            tick_step_ms: 20,
            enemy_count: 3,
            enemy_tick_interval: 4,
            coconut_chance: 0.15,
            score_file: crate::scores::default_path(),
        }
    }
}
