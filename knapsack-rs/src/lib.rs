//! Exact and approximate solvers for the 0/1 knapsack problem, together with a harness
//! that runs them uniformly over datasets of instances and measures their execution time and accuracy.

/// Entities to model 0/1 knapsack problems and their solutions
pub mod entities;

/// The solving methods: branch and bound, dynamic programming, FPTAS and a greedy heuristic
pub mod solvers;

/// Running solvers over datasets, timing them and aggregating the results
pub mod bench;

/// Importing datasets into and exporting them out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
