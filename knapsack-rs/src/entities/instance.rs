use crate::entities::Item;
use crate::util::assertions;
use serde::{Deserialize, Serialize};

/// Instance of the 0/1 knapsack problem: a weight capacity and a set of items, each with a price and a weight.
/// Created once and never modified afterwards. Solvers which need different prices work on a copy.
///
/// The total weight and the total price of all items are both below `u64::MAX`:
/// no sum over a subset of the items overflows, and neither does one more than such a sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Maximum total weight of the items in the knapsack
    pub capacity: u64,
    /// Items ordered by their index
    pub items: Vec<Item>,
}

impl Instance {
    pub fn new(capacity: u64, items: Vec<Item>) -> Self {
        assert!(
            assertions::instance_item_indices_correct(&items),
            "All items should have consecutive indices starting from 0"
        );
        assert!(
            assertions::instance_totals_in_range(&items),
            "Total weight and total price of the items should be below u64::MAX"
        );

        Self { capacity, items }
    }

    /// Creates an instance from `(price, weight)` pairs, indexed in the order given
    pub fn from_pairs(capacity: u64, pairs: &[(u64, u64)]) -> Self {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(i, &(price, weight))| Item::new(price, weight, i))
            .collect();
        Self::new(capacity, items)
    }

    /// Copy of the instance in which every item's price is replaced by `f(item)`
    pub fn with_prices(&self, f: impl Fn(&Item) -> u64) -> Self {
        let items = self.items.iter().map(|item| item.with_price(f(item))).collect();
        Self::new(self.capacity, items)
    }

    /// Sum of `values`, `None` if it does not stay below `u64::MAX`
    pub fn checked_total(values: impl IntoIterator<Item = u64>) -> Option<u64> {
        values
            .into_iter()
            .try_fold(0u64, |acc, v| acc.checked_add(v))
            .filter(|&total| total < u64::MAX)
    }

    pub fn item(&self, index: usize) -> &Item {
        &self.items[index]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_price(&self) -> u64 {
        self.items.iter().map(|i| i.price).sum()
    }

    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|i| i.weight).sum()
    }

    /// Highest price among the items which fit into the empty knapsack on their own
    pub fn max_fitting_price(&self) -> u64 {
        self.items
            .iter()
            .filter(|i| self.fits(i))
            .map(|i| i.price)
            .max()
            .unwrap_or(0)
    }

    /// Whether the item fits into the empty knapsack
    pub fn fits(&self, item: &Item) -> bool {
        item.weight <= self.capacity
    }

    /// Total price of the items present in `config`
    pub fn config_price(&self, config: &[bool]) -> u64 {
        self.items
            .iter()
            .zip(config)
            .filter(|(_, present)| **present)
            .map(|(item, _)| item.price)
            .sum()
    }

    /// Total weight of the items present in `config`
    pub fn config_weight(&self, config: &[bool]) -> u64 {
        self.items
            .iter()
            .zip(config)
            .filter(|(_, present)| **present)
            .map(|(item, _)| item.weight)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: u64 = 1 << 63;

    #[test]
    fn checked_total_stops_below_max() {
        assert_eq!(Instance::checked_total([]), Some(0));
        assert_eq!(Instance::checked_total([HALF - 1, HALF - 1]), Some(u64::MAX - 1));
        assert_eq!(Instance::checked_total([HALF - 1, HALF]), None);
        assert_eq!(Instance::checked_total([HALF, HALF]), None);
    }

    #[test]
    #[should_panic]
    fn overflowing_total_weight_is_rejected() {
        Instance::from_pairs(HALF, &[(1, HALF), (1, HALF)]);
    }

    #[test]
    fn largest_totals_are_summed_exactly() {
        let instance = Instance::from_pairs(HALF, &[(HALF - 1, HALF - 1), (HALF - 1, HALF - 1)]);
        assert_eq!(instance.total_weight(), u64::MAX - 1);
        assert_eq!(instance.total_price(), u64::MAX - 1);
        assert_eq!(instance.config_weight(&[true, true]), u64::MAX - 1);
    }
}
