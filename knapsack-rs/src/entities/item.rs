use serde::{Deserialize, Serialize};

/// Item which can be put into the knapsack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub price: u64,
    pub weight: u64,
    /// Position of the item in the original item list.
    /// Every configuration vector is keyed by this index, regardless of any reordering done by a solver.
    pub index: usize,
}

impl Item {
    pub fn new(price: u64, weight: u64, index: usize) -> Self {
        Self {
            price,
            weight,
            index,
        }
    }

    /// Same item with a different price, used to build rescaled working copies of an instance
    pub fn with_price(&self, price: u64) -> Self {
        Item { price, ..*self }
    }

    /// Price per unit of weight. Weightless items have an infinite ratio.
    pub fn price_weight_ratio(&self) -> f64 {
        match self.weight {
            0 => f64::INFINITY,
            w => self.price as f64 / w as f64,
        }
    }
}
