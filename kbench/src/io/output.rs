use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use itertools::Itertools;
use knapsack_rs::bench::{AggregateStats, DatasetResults, DatasetStats, TimedResult};
use knapsack_rs::solvers::Method;
use log::info;

pub const RESULTS_SUFFIX: &str = ".results";
pub const STATS_SUFFIX: &str = ".stats";

/// Row of a results or statistics listing
pub trait Record {
    fn columns(&self) -> Vec<&'static str>;
    fn values(&self) -> Vec<String>;
}

impl Record for TimedResult {
    fn columns(&self) -> Vec<&'static str> {
        let mut columns = vec!["price", "config", "cpu_time", "wall_clock_time"];
        if self.relative_error.is_some() {
            columns.push("relative_error");
        }
        columns
    }

    fn values(&self) -> Vec<String> {
        let mut values = vec![
            self.solution.price.to_string(),
            config_to_string(&self.solution.config),
            float_to_string(self.cpu_time),
            float_to_string(self.wall_clock_time),
        ];
        if let Some(e) = self.relative_error {
            values.push(float_to_string(e));
        }
        values
    }
}

impl Record for AggregateStats {
    fn columns(&self) -> Vec<&'static str> {
        self.fields().into_iter().map(|(k, _)| k).collect()
    }

    fn values(&self) -> Vec<String> {
        self.fields()
            .into_iter()
            .map(|(_, v)| float_to_string(v))
            .collect()
    }
}

/// Renders a configuration as `[1, 0, 1]`
pub fn config_to_string(config: &[bool]) -> String {
    format!("[{}]", config.iter().map(|&p| p as u8).join(", "))
}

fn float_to_string(v: f64) -> String {
    format!("{v:?}")
}

/// Writes a listing: a `# <name>` line, a `# <columns>` line and a line per record
pub fn write_block<R: Record>(out: &mut impl Write, name: &str, records: &[R]) -> std::io::Result<()> {
    writeln!(out, "# {name}")?;
    if let Some(first) = records.first() {
        writeln!(out, "# {}", first.columns().join("    "))?;
    }
    for record in records {
        writeln!(out, "{}", record.values().join(" "))?;
    }
    Ok(())
}

/// Prints results and statistics per dataset and method,
/// either to stdout or to one file per listing in an output directory.
pub struct OutputPrinter<'a> {
    /// File names of the dataset files without extension, in dataset order
    basenames: Vec<String>,
    out_dir: Option<&'a Path>,
}

impl<'a> OutputPrinter<'a> {
    pub fn new(dataset_files: &[PathBuf], out_dir: Option<&'a Path>) -> Self {
        let basenames = dataset_files
            .iter()
            .map(|p| {
                p.file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default()
            })
            .collect();
        Self { basenames, out_dir }
    }

    pub fn print_results(&self, results: &[DatasetResults]) -> Result<()> {
        let listings = results.iter().enumerate().flat_map(|(i, dr)| {
            dr.methods
                .iter()
                .map(move |mr| (i, mr.method, mr.results.as_slice()))
        });
        self.print(listings, RESULTS_SUFFIX)
    }

    pub fn print_stats(&self, stats: &[DatasetStats]) -> Result<()> {
        let listings = stats.iter().enumerate().flat_map(|(i, ds)| {
            ds.methods
                .iter()
                .map(move |ms| (i, ms.method, std::slice::from_ref(&ms.stats)))
        });
        self.print(listings, STATS_SUFFIX)
    }

    /// Name of the listing of a dataset and method, joined with the output directory if there is one
    pub fn listing_name(&self, dataset_index: usize, method: Method, suffix: &str) -> PathBuf {
        let file_name = format!("{}_{}{}", self.basenames[dataset_index], method, suffix);
        match self.out_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }

    fn print<'r, R: Record + 'r>(
        &self,
        listings: impl Iterator<Item = (usize, Method, &'r [R])>,
        suffix: &str,
    ) -> Result<()> {
        match self.out_dir {
            None => {
                let mut out = std::io::stdout().lock();
                for (i, method, records) in listings {
                    let name = self.listing_name(i, method, suffix);
                    write_block(&mut out, &name.to_string_lossy(), records)?;
                    writeln!(out)?;
                }
                out.flush()?;
            }
            Some(_) => {
                for (i, method, records) in listings {
                    let path = self.listing_name(i, method, suffix);
                    let file = File::create(&path)
                        .with_context(|| format!("could not create {}", path.display()))?;
                    let mut writer = BufWriter::new(file);
                    write_block(&mut writer, &path.to_string_lossy(), records)?;
                    writer.flush()?;
                    info!("[OUTPUT] {} written", path.display());
                }
            }
        }
        Ok(())
    }
}
