use log::debug;
use ndarray::{Array2, s};
use thousands::Separable;

use crate::entities::{Instance, Solution};
use crate::solvers::Solver;
use crate::util::assertions;

/// Exact solver using dynamic programming with decomposition by price.
///
/// Builds a table of the minimum weight needed to reach every total price with the first `n` items,
/// and picks the highest price whose minimum weight fits in the knapsack.
/// Time and memory are `O(n_items * total_price)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicProgramming;

impl Solver for DynamicProgramming {
    fn solve(&self, instance: &Instance) -> Solution {
        let table = WeightTable::build(instance);
        let price = table.best_price(instance.capacity);
        let config = table.configuration(instance, price);

        let solution = Solution { price, config };
        debug_assert!(assertions::solution_is_valid(instance, &solution));
        solution
    }
}

/// Dense table where cell `[n, c]` holds the minimum total weight of a subset of the first `n` items
/// with a total price of exactly `c`.
///
/// Unreachable cells hold the sentinel `infinity`, one more than the total weight of all items,
/// so it compares larger than the weight of every subset. Additions are clamped to the sentinel:
/// the table cannot overflow and all unreachable cells compare equal.
pub(crate) struct WeightTable {
    weights: Array2<u64>,
    infinity: u64,
}

impl WeightTable {
    pub(crate) fn build(instance: &Instance) -> Self {
        let n_items = instance.n_items();
        let total_price = instance.total_price() as usize;
        let infinity = instance.total_weight().saturating_add(1);

        debug!(
            "[DP] building a {} x {} weight table",
            (n_items + 1).separate_with_commas(),
            (total_price + 1).separate_with_commas()
        );

        let mut weights = Array2::from_elem((n_items + 1, total_price + 1), infinity);
        weights[[0, 0]] = 0;

        for (n, item) in instance.items.iter().enumerate() {
            let price = item.price as usize;
            let (prev, mut next) = weights.multi_slice_mut((s![n, ..], s![n + 1, ..]));
            for c in 0..=total_price {
                let without = prev[c];
                let with = match c.checked_sub(price) {
                    Some(rest) => prev[rest].saturating_add(item.weight).min(infinity),
                    None => infinity,
                };
                next[c] = without.min(with);
            }
        }

        Self { weights, infinity }
    }

    pub(crate) fn n_items(&self) -> usize {
        self.weights.nrows() - 1
    }

    /// Minimum weight to reach a total price of exactly `price` with all items, `None` if unreachable
    pub(crate) fn min_weight(&self, price: usize) -> Option<u64> {
        match self.weights[[self.n_items(), price]] {
            w if w == self.infinity => None,
            w => Some(w),
        }
    }

    /// Highest total price whose minimum weight does not exceed the capacity. Price 0 is always feasible.
    pub(crate) fn best_price(&self, capacity: u64) -> u64 {
        (0..self.weights.ncols())
            .rev()
            .find(|&c| self.min_weight(c).is_some_and(|w| w <= capacity))
            .unwrap_or(0) as u64
    }

    /// Walks back through the table to find which items realize `price`
    pub(crate) fn configuration(&self, instance: &Instance, price: u64) -> Vec<bool> {
        let mut config = vec![false; self.n_items()];
        let mut c = price as usize;
        for n in (1..=self.n_items()).rev() {
            if self.weights[[n, c]] != self.weights[[n - 1, c]] {
                config[n - 1] = true;
                c -= instance.item(n - 1).price as usize;
            }
        }
        config
    }
}
