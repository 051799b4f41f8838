use std::path::PathBuf;

use clap::Parser;
use crate::prelude::*;

/// Plays jump-and-erase boards with the decision engine and reports how much of each board it cleared.
#[derive(Clone, Debug, Parser)]
#[command(version)]
pub struct HarnessOptions {
    /// Board files to play. When none are given, the boards directory is scanned instead.
    pub boards: Vec<PathBuf>,

    #[arg(short = 'd', long, default_value = "boards")]
    pub boards_dir: PathBuf,

    /// The file each run's summary is appended to.
    #[arg(short, long, default_value = "results/test_results.txt")]
    pub results: PathBuf,

    #[arg(long, default_value = env!("CARGO_PKG_NAME"))]
    pub label: String,

    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(short, long)]
    pub num_threads: Option<usize>,

    #[arg(long)]
    pub endgame_threshold: Option<f64>,

    #[arg(long)]
    pub survival_depth: Option<usize>,

    #[arg(long)]
    pub lookahead_depth: Option<usize>,

    /// Prints every board as it stands when its game ends.
    #[arg(short, long, default_value_t = false)]
    pub show: bool,
}

impl HarnessOptions {
    pub fn agent_config(&self) -> AgentConfig {
        let mut config = AgentConfig::default();

        if let Some(num_threads) = self.num_threads {
            config.parallel = num_threads > 1;
        }
        if let Some(threshold) = self.endgame_threshold {
            config.endgame_threshold = threshold;
        }
        if let Some(depth) = self.survival_depth {
            config.survival_depth = depth;
        }
        if let Some(depth) = self.lookahead_depth {
            config.lookahead_depth = depth;
        }

        config
    }
}
