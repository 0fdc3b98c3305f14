use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use knapsack_rs::bench::EPOCH;
use knapsack_rs::entities::Dataset;
use knapsack_rs::io::import::import_dataset;
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

pub mod cli;
pub mod graph;
pub mod json_report;
pub mod option_check;
pub mod output;

pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("could not read dataset file {}", path.display()))?;
    import_dataset(&content)
        .with_context(|| format!("could not parse dataset file {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create json file {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write json file {}", path.display()))?;
    info!("[IO] json written to file://{}", canonical(path));
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file {}", path.display()))?;
    info!("[IO] svg written to file://{}", canonical(path));
    Ok(())
}

pub fn write_text(content: &str, path: &Path) -> Result<()> {
    fs::write(path, content).with_context(|| format!("could not write {}", path.display()))?;
    info!("[IO] text written to file://{}", canonical(path));
    Ok(())
}

fn canonical(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Installs a logger writing to stderr, so stdout only carries results
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()?;
    info!("[MAIN] start time: {}", jiff::Zoned::now());
    Ok(())
}
