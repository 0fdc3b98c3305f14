use crate::entities::Instance;
use serde::{Deserialize, Serialize};

/// Result of solving an [`Instance`]: the price achieved and which items are in the knapsack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Total (original, unscaled) price of the items in the knapsack
    pub price: u64,
    /// Presence of every item in the knapsack, indexed by [`Item::index`](crate::entities::Item::index)
    pub config: Vec<bool>,
}

impl Solution {
    /// Builds a solution from a configuration, pricing it with the instance's prices
    pub fn from_config(instance: &Instance, config: Vec<bool>) -> Self {
        debug_assert_eq!(config.len(), instance.n_items());
        let price = instance.config_price(&config);
        Self { price, config }
    }

    /// The solution of leaving every item out
    pub fn empty(instance: &Instance) -> Self {
        Self {
            price: 0,
            config: vec![false; instance.n_items()],
        }
    }

    pub fn weight(&self, instance: &Instance) -> u64 {
        instance.config_weight(&self.config)
    }

    pub fn is_feasible(&self, instance: &Instance) -> bool {
        self.weight(instance) <= instance.capacity
    }
}
