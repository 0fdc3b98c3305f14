use std::cmp::Reverse;

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::entities::{Instance, Item, Solution};
use crate::solvers::Solver;
use crate::util::assertions;

/// Greedy heuristic by price to weight ratio.
/// Items with the best ratio are put into the knapsack first, until the first item which does not fit.
/// Fast (`O(n log n)`), but without any guarantee on the quality of the solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Heuristic {
    /// Items by descending price to weight ratio. Equal ratios keep their original order.
    pub fn item_order(instance: &Instance) -> Vec<&Item> {
        instance
            .items
            .iter()
            .sorted_by_key(|item| Reverse(OrderedFloat(item.price_weight_ratio())))
            .collect()
    }
}

impl Solver for Heuristic {
    fn solve(&self, instance: &Instance) -> Solution {
        let mut config = vec![false; instance.n_items()];
        let mut weight = 0;
        for item in Heuristic::item_order(instance) {
            if weight + item.weight > instance.capacity {
                break;
            }
            config[item.index] = true;
            weight += item.weight;
        }

        let solution = Solution::from_config(instance, config);
        debug_assert!(assertions::solution_is_valid(instance, &solution));
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_ratio() {
        let instance = Instance::from_pairs(10, &[(6, 2), (10, 4), (12, 6), (1, 0)]);
        let order = Heuristic::item_order(&instance)
            .iter()
            .map(|i| i.index)
            .collect_vec();
        // ratios: 3, 2.5, 2, inf
        assert_eq!(order, vec![3, 0, 1, 2]);
    }

    #[test]
    fn first_rejected_item_ends_the_scan() {
        // ratios: 5, 2, 1; the third item would still fit after the second is rejected
        let instance = Instance::from_pairs(6, &[(10, 2), (10, 5), (1, 1)]);
        let sol = Heuristic.solve(&instance);
        assert_eq!(sol.price, 10);
        assert_eq!(sol.config, vec![true, false, false]);
    }

    #[test]
    fn configuration_follows_original_indices() {
        let instance = Instance::from_pairs(10, &[(6, 2), (10, 4), (12, 6)]);
        let sol = Heuristic.solve(&instance);
        // takes items 0 and 1 (weight 6), item 2 overflows
        assert_eq!(sol.price, 16);
        assert_eq!(sol.config, vec![true, true, false]);
    }

    #[test]
    fn single_item() {
        let fits = Instance::from_pairs(3, &[(5, 3)]);
        assert_eq!(Heuristic.solve(&fits), Solution { price: 5, config: vec![true] });

        let too_heavy = Instance::from_pairs(2, &[(5, 3)]);
        assert_eq!(Heuristic.solve(&too_heavy), Solution { price: 0, config: vec![false] });
    }

    #[test]
    fn zero_capacity_selects_nothing() {
        let instance = Instance::from_pairs(0, &[(6, 2), (10, 4), (12, 6)]);
        let sol = Heuristic.solve(&instance);
        assert_eq!(sol.price, 0);
        assert_eq!(sol.config, vec![false; 3]);
    }
}
