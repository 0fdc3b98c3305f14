use std::path::PathBuf;

use knapsack_rs::bench::{DatasetResults, DatasetStats, MethodSelection};
use serde::{Deserialize, Serialize};

use crate::config::BenchConfig;

/// Everything a benchmark run produced, written with `--json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    pub dataset_files: Vec<PathBuf>,
    pub selection: MethodSelection,
    pub config: BenchConfig,
    pub results: Vec<DatasetResults>,
    pub stats: Vec<DatasetStats>,
}
