//! Command line benchmark of the `knapsack-rs` solvers:
//! option checks, configuration, printers for results and statistics, graphs and JSON reports.

pub mod config;
pub mod io;
