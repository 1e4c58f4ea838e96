//! Command implementations

pub mod play;
pub mod rank;
pub mod simulate;

pub use play::{PlayConfig, run_play};
pub use rank::run_rank;
pub use simulate::{
    GameResult, SimulateConfig, SimulationStats, run_simulation, simulate_game, summarize,
};
