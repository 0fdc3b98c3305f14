use log::debug;
use thousands::Separable;

use crate::entities::{Instance, Solution};
use crate::solvers::Solver;
use crate::util::assertions;

/// Exact solver exploring the binary decision tree over the items (in index order) depth first.
///
/// At every node the decided prefix is a candidate solution by itself (all undecided items left out).
/// A branch is cut when the prefix is overweight, or when even adding all undecided items
/// cannot strictly improve on the best price found so far.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchAndBound;

impl Solver for BranchAndBound {
    fn solve(&self, instance: &Instance) -> Solution {
        if instance.n_items() == 0 {
            return Solution::empty(instance);
        }

        let mut search = Search::new(instance);
        search.explore(0, 0, 0);

        debug!(
            "[B&B] explored {} nodes for {} items",
            search.n_nodes.separate_with_commas(),
            instance.n_items()
        );

        let solution = search.best.unwrap_or_else(|| Solution::empty(instance));
        debug_assert!(assertions::solution_is_valid(instance, &solution));
        solution
    }
}

/// Scratch state of a single branch and bound search
struct Search<'a> {
    instance: &'a Instance,
    /// Decisions of the current branch. Only entries up to the current depth are meaningful,
    /// deeper entries are overwritten before they are read.
    config: Vec<bool>,
    /// `remaining_price[i]`: total price of the items `i..n`
    remaining_price: Vec<u64>,
    best: Option<Solution>,
    n_nodes: usize,
}

impl<'a> Search<'a> {
    fn new(instance: &'a Instance) -> Self {
        let n = instance.n_items();
        let mut remaining_price = vec![0; n + 1];
        for i in (0..n).rev() {
            remaining_price[i] = remaining_price[i + 1] + instance.item(i).price;
        }
        Self {
            instance,
            config: vec![false; n],
            remaining_price,
            best: None,
            n_nodes: 0,
        }
    }

    /// Decides item `index`, first leaving it out, then putting it in.
    /// `prefix_weight` and `prefix_price` cover the items decided before `index`.
    fn explore(&mut self, index: usize, prefix_weight: u64, prefix_price: u64) {
        let item = *self.instance.item(index);
        for present in [false, true] {
            self.config[index] = present;
            let (weight, price) = match present {
                false => (prefix_weight, prefix_price),
                true => (prefix_weight + item.weight, prefix_price + item.price),
            };
            if !self.stop(index, weight, price) {
                self.explore(index + 1, weight, price);
            }
        }
    }

    /// Records the prefix `[0..=index]` if it improves the best solution and
    /// determines whether the current branch should be cut.
    fn stop(&mut self, index: usize, weight: u64, price: u64) -> bool {
        self.n_nodes += 1;
        self.update_best(index, weight, price);

        // no more items to decide
        if index + 1 >= self.instance.n_items() {
            return true;
        }
        // knapsack is overloaded
        if weight > self.instance.capacity {
            return true;
        }
        // adding all remaining items cannot beat the best price
        match &self.best {
            Some(best) => price + self.remaining_price[index + 1] <= best.price,
            None => false,
        }
    }

    fn update_best(&mut self, index: usize, weight: u64, price: u64) {
        let improves = match &self.best {
            None => true,
            Some(best) => weight <= self.instance.capacity && price > best.price,
        };
        if improves {
            //undecided items are left out
            let mut config = vec![false; self.config.len()];
            config[..=index].copy_from_slice(&self.config[..=index]);
            self.best = Some(Solution { price, config });
        }
    }
}
