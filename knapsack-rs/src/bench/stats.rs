use serde::{Deserialize, Serialize};

use crate::bench::{DatasetResults, TimedResult};
use crate::solvers::Method;

/// Averages of the results of one method over all instances of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    pub avg_price: f64,
    pub avg_cpu_time: f64,
    pub avg_wall_clock_time: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avg_relative_error: Option<f64>,
}

impl AggregateStats {
    /// Averages the results. No results average to zero.
    /// The relative error is only averaged if every result carries one.
    pub fn from_results(results: &[TimedResult]) -> Self {
        let n = results.len() as f64;
        let avg = |sum: f64| if results.is_empty() { 0.0 } else { sum / n };

        let avg_relative_error = results
            .iter()
            .map(|r| r.relative_error)
            .sum::<Option<f64>>()
            .map(avg);

        Self {
            avg_price: avg(results.iter().map(|r| r.solution.price as f64).sum()),
            avg_cpu_time: avg(results.iter().map(|r| r.cpu_time).sum()),
            avg_wall_clock_time: avg(results.iter().map(|r| r.wall_clock_time).sum()),
            avg_relative_error,
        }
    }

    /// Named values, in reporting order
    pub fn fields(&self) -> Vec<(&'static str, f64)> {
        let mut fields = vec![
            ("avg_price", self.avg_price),
            ("avg_cpu_time", self.avg_cpu_time),
            ("avg_wall_clock_time", self.avg_wall_clock_time),
        ];
        if let Some(e) = self.avg_relative_error {
            fields.push(("avg_relative_error", e));
        }
        fields
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodStats {
    pub method: Method,
    #[serde(flatten)]
    pub stats: AggregateStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub dataset_id: u64,
    pub methods: Vec<MethodStats>,
}

impl DatasetStats {
    pub fn method(&self, method: Method) -> Option<&MethodStats> {
        self.methods.iter().find(|ms| ms.method == method)
    }
}

/// Aggregates the results of every method on every dataset, preserving their order
pub fn stats(results: &[DatasetResults]) -> Vec<DatasetStats> {
    results
        .iter()
        .map(|dr| DatasetStats {
            dataset_id: dr.dataset_id,
            methods: dr
                .methods
                .iter()
                .map(|mr| MethodStats {
                    method: mr.method,
                    stats: AggregateStats::from_results(&mr.results),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::MethodResults;
    use crate::entities::Solution;

    fn result(price: u64, cpu_time: f64, relative_error: Option<f64>) -> TimedResult {
        TimedResult {
            solution: Solution {
                price,
                config: vec![],
            },
            cpu_time,
            wall_clock_time: 2.0 * cpu_time,
            relative_error,
        }
    }

    #[test]
    fn averages() {
        let stats = AggregateStats::from_results(&[
            result(10, 1.0, Some(0.0)),
            result(20, 3.0, Some(0.5)),
        ]);
        assert_eq!(stats.avg_price, 15.0);
        assert_eq!(stats.avg_cpu_time, 2.0);
        assert_eq!(stats.avg_wall_clock_time, 4.0);
        assert_eq!(stats.avg_relative_error, Some(0.25));
        assert_eq!(
            stats.fields().iter().map(|(k, _)| *k).collect::<Vec<_>>(),
            vec!["avg_price", "avg_cpu_time", "avg_wall_clock_time", "avg_relative_error"]
        );
    }

    #[test]
    fn no_relative_error_field_without_baseline() {
        let stats = AggregateStats::from_results(&[result(4, 0.5, None)]);
        assert_eq!(stats.avg_relative_error, None);
        assert_eq!(stats.fields().len(), 3);
    }

    #[test]
    fn empty_results_average_to_zero() {
        let stats = AggregateStats::from_results(&[]);
        assert_eq!(stats.avg_price, 0.0);
        assert_eq!(stats.avg_cpu_time, 0.0);
        assert_eq!(stats.avg_wall_clock_time, 0.0);
    }

    #[test]
    fn stats_follow_result_order() {
        let results = vec![
            DatasetResults {
                dataset_id: 9,
                methods: vec![
                    MethodResults {
                        method: Method::Heuristic,
                        results: vec![result(1, 1.0, None)],
                    },
                    MethodResults {
                        method: Method::Fptas,
                        results: vec![result(3, 1.0, None), result(5, 1.0, None)],
                    },
                ],
            },
            DatasetResults {
                dataset_id: 2,
                methods: vec![],
            },
        ];
        let stats = stats(&results);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].dataset_id, 9);
        assert_eq!(stats[0].methods[0].method, Method::Heuristic);
        assert_eq!(stats[0].method(Method::Fptas).unwrap().stats.avg_price, 4.0);
        assert!(stats[1].methods.is_empty());
    }
}
