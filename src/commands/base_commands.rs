use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::services::marginal_return::DEFAULT_PLATEAU_THRESHOLD;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the unit contribution margin for a query count
    Margin {
        /// Path to cost parameters YAML
        #[arg(short, long)]
        config: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Number of bureau queries per contract
        #[arg(short, long, default_value_t = 1)]
        queries: u64,
    },
    /// Compute the breakeven query count
    Breakeven {
        /// Path to cost parameters YAML
        #[arg(short, long)]
        config: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Project aggregate gross profit and query cost over a volume range
    Project {
        /// Path to cost parameters YAML
        #[arg(short, long)]
        config: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Share of queries that result in an approved contract
        #[arg(short, long, default_value_t = 0.006)]
        approval_rate: f64,
        /// Fixed profit per approved contract
        #[arg(short, long, default_value_t = 8.35)]
        profit_per_approval: f64,
        /// Largest query volume to project
        #[arg(short, long, default_value_t = 3_000_000.0)]
        max_volume: f64,
        /// Number of volume samples
        #[arg(short = 'n', long, default_value_t = 100)]
        samples: usize,
    },
    /// Locate the plateau of the marginal-return curve
    Plateau {
        /// Path to cost parameters YAML
        #[arg(short, long)]
        config: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Unit MCU; defaults to the zero-query margin from the config
        #[arg(short, long)]
        unit_mcu: Option<f64>,
        /// Smallest query volume to sample
        #[arg(long, default_value_t = 1000.0)]
        min_volume: f64,
        /// Largest query volume to sample
        #[arg(long, default_value_t = 75000.0)]
        max_volume: f64,
        /// Number of volume samples
        #[arg(short = 'n', long, default_value_t = 100)]
        samples: usize,
        /// Smoothed-delta threshold for plateau detection
        #[arg(short, long, default_value_t = DEFAULT_PLATEAU_THRESHOLD)]
        threshold: f64,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
