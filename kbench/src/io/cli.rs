use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Solves datasets of 0/1 knapsack instances with the requested methods
/// and reports their results, execution times and relative errors.
#[derive(Parser, Debug)]
#[command(name = "kbench", author, override_usage = "kbench [OPTIONS] DATASET_FILE...")]
pub struct Cli {
    /// Use branch and bound method of solving
    #[arg(short, long)]
    pub branch_and_bound: bool,
    /// Use dynamic programming for solving
    #[arg(short, long)]
    pub dynamic_programming: bool,
    /// Use FPTAS for solving
    #[arg(short, long)]
    pub fptas: bool,
    /// Use the price to weight ratio heuristic for solving
    #[arg(short = 'r', long)]
    pub heuristic: bool,
    /// Relative error for FPTAS from range (0,1)
    #[arg(short = 'e', long, value_name = "EPS", allow_hyphen_values = true)]
    pub fptas_epsilon: Option<String>,
    /// Directory for output log files, printed to stdout if undefined
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,
    /// Directory for graphs
    #[arg(short, long, value_name = "DIR")]
    pub graphs: Option<PathBuf>,
    /// File for a JSON report of all results and statistics
    #[arg(short, long, value_name = "FILE")]
    pub json: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Show program version
    #[arg(short, long)]
    pub version: bool,
    #[arg(value_name = "DATASET_FILE")]
    pub datasets: Vec<PathBuf>,
}
