use crate::entities::{Instance, Item, Solution};
use log::error;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn instance_item_indices_correct(items: &[Item]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.index == i)
}

pub fn instance_totals_in_range(items: &[Item]) -> bool {
    Instance::checked_total(items.iter().map(|i| i.weight)).is_some()
        && Instance::checked_total(items.iter().map(|i| i.price)).is_some()
}

/// The configuration covers every item and the price matches the selected items' prices
pub fn solution_matches_instance(instance: &Instance, sol: &Solution) -> bool {
    if sol.config.len() != instance.n_items() {
        error!(
            "configuration has {} entries, instance has {} items",
            sol.config.len(),
            instance.n_items()
        );
        return false;
    }
    let config_price = instance.config_price(&sol.config);
    if config_price != sol.price {
        error!(
            "reported price {} differs from the configuration's price {}",
            sol.price, config_price
        );
        return false;
    }
    true
}

pub fn solution_is_feasible(instance: &Instance, sol: &Solution) -> bool {
    let weight = sol.weight(instance);
    if weight > instance.capacity {
        error!(
            "configuration weighs {} which exceeds the capacity {}",
            weight, instance.capacity
        );
        return false;
    }
    true
}

/// Both checks above, for the solution returned by any solver
pub fn solution_is_valid(instance: &Instance, sol: &Solution) -> bool {
    solution_matches_instance(instance, sol) && solution_is_feasible(instance, sol)
}

/// A rescaled working copy differs from the original only in its prices
pub fn rescaled_instance_matches(original: &Instance, rescaled: &Instance) -> bool {
    original.capacity == rescaled.capacity
        && original.n_items() == rescaled.n_items()
        && original
            .items
            .iter()
            .zip(&rescaled.items)
            .all(|(o, r)| o.index == r.index && o.weight == r.weight)
}
