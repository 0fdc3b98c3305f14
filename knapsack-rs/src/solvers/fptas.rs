use log::debug;

use crate::entities::{Instance, Solution};
use crate::solvers::{DynamicProgramming, Solver};
use crate::util::assertions;

/// Fully Polynomial-Time Approximation Scheme.
///
/// Prices are divided by `k = epsilon * max_price / n_items` and rounded down, which shrinks the
/// dynamic programming table to `O(n_items^2 / epsilon)` columns. The price of the resulting
/// configuration is at least `(1 - epsilon)` times the optimum.
/// Weights are left untouched, so the solution is always feasible.
///
/// `max_price` only considers items which fit into the knapsack by themselves: the optimum is never
/// below it, which is what bounds the rounding loss. Items which can never fit are rescaled to price 0.
#[derive(Debug, Clone, Copy)]
pub struct Fptas {
    /// Maximum allowed relative error, in the open interval (0, 1)
    pub epsilon: f64,
}

impl Fptas {
    pub fn new(epsilon: f64) -> Self {
        debug_assert!(epsilon > 0.0 && epsilon < 1.0, "epsilon must be in (0,1)");
        Self { epsilon }
    }

    /// Factor by which all prices are divided.
    /// Zero when no item with a non-zero price fits, in which case every rescaled price collapses to zero.
    pub fn scaling_factor(&self, instance: &Instance) -> f64 {
        (self.epsilon * instance.max_fitting_price() as f64) / instance.n_items() as f64
    }

    /// Working copy of the instance with rescaled prices. The original instance is left untouched.
    pub fn rescale(&self, instance: &Instance) -> Instance {
        let k = self.scaling_factor(instance);
        instance.with_prices(|item| match instance.fits(item) {
            // NaN (0/0) casts to 0
            true => (item.price as f64 / k).floor() as u64,
            false => 0,
        })
    }
}

impl Solver for Fptas {
    fn solve(&self, instance: &Instance) -> Solution {
        if instance.n_items() == 0 {
            return Solution::empty(instance);
        }

        let rescaled = self.rescale(instance);
        debug_assert!(assertions::rescaled_instance_matches(instance, &rescaled));
        debug!(
            "[FPTAS] total price rescaled from {} to {} (epsilon: {})",
            instance.total_price(),
            rescaled.total_price(),
            self.epsilon
        );

        let rescaled_sol = DynamicProgramming.solve(&rescaled);

        //report the original prices of the selected items
        let solution = Solution::from_config(instance, rescaled_sol.config);
        debug_assert!(assertions::solution_is_valid(instance, &solution));
        solution
    }
}
