use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use kbench::config::BenchConfig;
use kbench::io;
use kbench::io::cli::Cli;
use kbench::io::graph::Graph;
use kbench::io::json_report::JsonReport;
use kbench::io::option_check;
use kbench::io::output::OutputPrinter;
use knapsack_rs::bench;
use knapsack_rs::bench::{DatasetStats, MethodSelection};
use knapsack_rs::entities::Dataset;
use log::{info, warn};
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    if args.version {
        println!("kbench {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let selection = option_check::check(&args)?;

    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BenchConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)
                .with_context(|| format!("could not open config file {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    info!("[MAIN] Successfully parsed BenchConfig: {config:?}");

    let datasets = args
        .datasets
        .iter()
        .map(|path| io::read_dataset(path))
        .collect::<Result<Vec<Dataset>>>()?;
    info!(
        "[MAIN] {} datasets with {} items in total",
        datasets.len(),
        datasets
            .iter()
            .flat_map(|d| &d.instances)
            .map(|i| i.n_items())
            .sum::<usize>()
            .separate_with_commas()
    );

    let results = run(&selection, &datasets, &config)?;
    let stats = bench::stats(&results);

    let printer = OutputPrinter::new(&args.datasets, args.output.as_deref());
    printer.print_results(&results)?;
    printer.print_stats(&stats)?;

    if let Some(graphs_dir) = &args.graphs {
        write_graphs(&stats, graphs_dir, &config)?;
    }

    if let Some(json_path) = &args.json {
        let report = JsonReport {
            dataset_files: args.datasets.clone(),
            selection,
            config,
            results,
            stats,
        };
        io::write_json(&report, json_path)?;
    }

    Ok(())
}

fn run(
    selection: &MethodSelection,
    datasets: &[Dataset],
    config: &BenchConfig,
) -> Result<Vec<bench::DatasetResults>> {
    match config.n_threads {
        None => Ok(bench::run(selection, datasets)),
        Some(n_threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n_threads)
                .thread_name(|i| format!("solver-{i}"))
                .build()
                .context("could not build thread pool")?;
            Ok(pool.install(|| bench::run(selection, datasets)))
        }
    }
}

fn write_graphs(stats: &[DatasetStats], out_dir: &Path, config: &BenchConfig) -> Result<()> {
    for graph in Graph::from_stats(stats) {
        io::write_svg(
            &graph.to_svg(&config.graph),
            &out_dir.join(format!("{}.svg", graph.title)),
        )?;
        io::write_text(
            &graph.to_gnuplot(out_dir),
            &out_dir.join(format!("{}.gnuplot", graph.title)),
        )?;
    }
    Ok(())
}
