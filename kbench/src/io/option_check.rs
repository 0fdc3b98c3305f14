use std::fs;
use std::path::Path;

use anyhow::{Result, bail, ensure};
use knapsack_rs::bench::MethodSelection;

use crate::io::cli::Cli;

/// Validates the command line before anything is solved.
/// The checks run in a fixed order and the first failing one is reported.
pub fn check(cli: &Cli) -> Result<MethodSelection> {
    ensure!(
        cli.branch_and_bound || cli.dynamic_programming || cli.fptas || cli.heuristic,
        "At least one method of solving must be requested"
    );
    let fptas = check_fptas_options(cli.fptas, cli.fptas_epsilon.as_deref())?;
    for dir in [&cli.output, &cli.graphs].into_iter().flatten() {
        check_output_directory(dir)?;
    }
    check_dataset_files(&cli.datasets)?;

    Ok(MethodSelection {
        branch_and_bound: cli.branch_and_bound,
        dynamic_programming: cli.dynamic_programming,
        heuristic: cli.heuristic,
        fptas,
    })
}

/// Returns the FPTAS epsilon if FPTAS is selected
fn check_fptas_options(fptas: bool, epsilon: Option<&str>) -> Result<Option<f64>> {
    match (fptas, epsilon) {
        (false, None) => Ok(None),
        (true, None) => bail!("Missing FPTAS epsilon constant"),
        (false, Some(_)) => bail!("epsilon constant must not be provided when FPTAS is not selected"),
        (true, Some(text)) => match parse_epsilon(text) {
            Some(eps) => Ok(Some(eps)),
            None => bail!("FPTAS epsilon must be number from range (0,1)"),
        },
    }
}

/// Accepts only a number in (0,1) written exactly the way it is displayed, e.g. `0.25` but not `.25` or `0.250`
fn parse_epsilon(text: &str) -> Option<f64> {
    let eps = text.parse::<f64>().ok()?;
    (eps > 0.0 && eps < 1.0 && eps.to_string() == text).then_some(eps)
}

fn check_output_directory(path: &Path) -> Result<()> {
    let p = path.display();
    let Ok(metadata) = fs::metadata(path) else {
        bail!("Directory '{p}' does not exists");
    };
    ensure!(metadata.is_dir(), "'{p}' is not a directory");
    ensure!(
        !metadata.permissions().readonly(),
        "Directory '{p}' is not writable"
    );
    Ok(())
}

fn check_dataset_files(paths: &[impl AsRef<Path>]) -> Result<()> {
    ensure!(!paths.is_empty(), "Missing datset file(s)");
    for path in paths {
        let path = path.as_ref();
        let p = path.display();
        let Ok(metadata) = fs::metadata(path) else {
            bail!("File '{p}' does not exists");
        };
        ensure!(metadata.is_file(), "'{p}' is not a regular file");
        ensure!(fs::File::open(path).is_ok(), "File '{p}' is not readable");
    }
    Ok(())
}
