mod branch_and_bound;
mod dynamic_programming;
mod fptas;
mod heuristic;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::entities::{Instance, Solution};

#[doc(inline)]
pub use branch_and_bound::BranchAndBound;
#[doc(inline)]
pub use dynamic_programming::DynamicProgramming;
#[doc(inline)]
pub use fptas::Fptas;
#[doc(inline)]
pub use heuristic::Heuristic;

/// A method of solving the 0/1 knapsack problem.
/// Solving never modifies the instance and keeps all scratch state local to the call,
/// so the same solver can be shared between threads.
pub trait Solver: Send + Sync {
    fn solve(&self, instance: &Instance) -> Solution;
}

/// All supported methods, in the order in which they are run and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    BranchAndBound,
    DynamicProgramming,
    Heuristic,
    Fptas,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::BranchAndBound,
        Method::DynamicProgramming,
        Method::Heuristic,
        Method::Fptas,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Method::BranchAndBound => "branch_and_bound",
            Method::DynamicProgramming => "dynamic_programming",
            Method::Heuristic => "heuristic",
            Method::Fptas => "fptas",
        }
    }

    /// Exact methods always find an optimal solution and can serve as a baseline for relative errors
    pub fn is_exact(&self) -> bool {
        matches!(self, Method::BranchAndBound | Method::DynamicProgramming)
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
