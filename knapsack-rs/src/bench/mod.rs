mod stats;
mod time;

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::entities::{Dataset, Solution};
use crate::solvers::{BranchAndBound, DynamicProgramming, Fptas, Heuristic, Method, Solver};

#[doc(inline)]
pub use stats::{AggregateStats, DatasetStats, MethodStats, stats};
#[doc(inline)]
pub use time::{EPOCH, TimeStamp, execution_time, thread_cpu_time};

/// Which solving methods to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MethodSelection {
    pub branch_and_bound: bool,
    pub dynamic_programming: bool,
    pub heuristic: bool,
    /// FPTAS is selected when its epsilon is defined
    pub fptas: Option<f64>,
}

impl MethodSelection {
    /// Selected methods in reporting order
    pub fn methods(&self) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|m| match m {
                Method::BranchAndBound => self.branch_and_bound,
                Method::DynamicProgramming => self.dynamic_programming,
                Method::Heuristic => self.heuristic,
                Method::Fptas => self.fptas.is_some(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.methods().is_empty()
    }

    /// Exact method whose prices serve as the optimum for relative errors.
    /// Branch and bound is preferred over dynamic programming.
    pub fn exact_baseline(&self) -> Option<Method> {
        self.methods().into_iter().find(|m| m.is_exact())
    }

    /// Solvers of the selected methods, in reporting order
    pub fn solvers(&self) -> Vec<(Method, Box<dyn Solver>)> {
        let mut solvers: Vec<(Method, Box<dyn Solver>)> = vec![];
        if self.branch_and_bound {
            solvers.push((Method::BranchAndBound, Box::new(BranchAndBound)));
        }
        if self.dynamic_programming {
            solvers.push((Method::DynamicProgramming, Box::new(DynamicProgramming)));
        }
        if self.heuristic {
            solvers.push((Method::Heuristic, Box::new(Heuristic)));
        }
        if let Some(epsilon) = self.fptas {
            solvers.push((Method::Fptas, Box::new(Fptas::new(epsilon))));
        }
        solvers
    }
}

/// [`Solution`] of a single instance together with how long it took to find it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedResult {
    #[serde(flatten)]
    pub solution: Solution,
    /// CPU time in seconds
    pub cpu_time: f64,
    /// Wall clock time in seconds
    pub wall_clock_time: f64,
    /// Relative shortfall of the price compared to the optimum.
    /// Only available when an exact method was run as well.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub relative_error: Option<f64>,
}

/// Results of one method on every instance of a dataset, in instance order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodResults {
    pub method: Method,
    pub results: Vec<TimedResult>,
}

/// Results of all selected methods on one dataset, in reporting order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetResults {
    pub dataset_id: u64,
    pub methods: Vec<MethodResults>,
}

impl DatasetResults {
    pub fn method(&self, method: Method) -> Option<&MethodResults> {
        self.methods.iter().find(|mr| mr.method == method)
    }
}

/// Solves every instance of every dataset with every selected method and measures the execution times.
/// If an exact method is selected, the relative error of every result is computed as well.
///
/// Instances are solved in parallel on the current rayon thread pool.
/// The order of the output (datasets, methods, instances) does not depend on the parallelism.
pub fn run(selection: &MethodSelection, datasets: &[Dataset]) -> Vec<DatasetResults> {
    let solvers = selection.solvers();
    info!(
        "[BENCH] solving {} datasets ({} instances) with [{}] on {} threads",
        datasets.len(),
        datasets.iter().map(|d| d.n_instances()).sum::<usize>(),
        solvers.iter().map(|(m, _)| m.name()).collect::<Vec<_>>().join(", "),
        rayon::current_num_threads()
    );

    let start = TimeStamp::now();

    let mut results = datasets
        .par_iter()
        .map(|dataset| {
            let methods = solvers
                .par_iter()
                .map(|(method, solver)| MethodResults {
                    method: *method,
                    results: dataset
                        .instances
                        .par_iter()
                        .map(|instance| execution_time(|| solver.solve(instance)))
                        .collect(),
                })
                .collect();
            DatasetResults {
                dataset_id: dataset.id,
                methods,
            }
        })
        .collect::<Vec<_>>();

    if let Some(baseline) = selection.exact_baseline() {
        add_relative_error(&mut results, baseline);
    }

    info!(
        "[BENCH] finished in {:.3}s",
        start.wall_elapsed_secs()
    );

    results
}

/// Attaches to every result its relative error with respect to the price found by `baseline` on the same instance
pub fn add_relative_error(results: &mut [DatasetResults], baseline: Method) {
    debug_assert!(baseline.is_exact());
    for dataset_results in results.iter_mut() {
        let optimal_prices = match dataset_results.method(baseline) {
            Some(mr) => mr.results.iter().map(|r| r.solution.price).collect::<Vec<_>>(),
            None => continue,
        };
        for method_results in dataset_results.methods.iter_mut() {
            for (result, &optimum) in method_results.results.iter_mut().zip(&optimal_prices) {
                result.relative_error = Some(relative_error(optimum, result.solution.price));
            }
        }
    }
}

/// `(optimum - price) / optimum`, zero when the optimum is zero
pub fn relative_error(optimum: u64, price: u64) -> f64 {
    match optimum {
        0 => 0.0,
        _ => (optimum as f64 - price as f64) / optimum as f64,
    }
}
