use anyhow::{Result, bail, ensure};
use log::debug;

use crate::entities::{Dataset, Instance, Item};

/// Parses a [`Dataset`]: a line with its non-negative integer ID,
/// followed by at least one instance line (see [`import_instance`]).
pub fn import_dataset(input: &str) -> Result<Dataset> {
    let mut lines = input.lines();
    let id = import_id(lines.next())?;
    let instances = lines.map(import_instance).collect::<Result<Vec<_>>>()?;
    ensure!(!instances.is_empty(), "dataset: missing instances");

    debug!(
        "[IMPORT] dataset {} with {} instances",
        id,
        instances.len()
    );
    Ok(Dataset::new(id, instances))
}

fn import_id(line: Option<&str>) -> Result<u64> {
    let Some(line) = line else {
        bail!("dataset: missing ID");
    };
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    ensure!(tokens.len() == 1, "dataset: first line does not contain ID");
    match tokens[0].parse::<i128>() {
        Ok(id) if id < 0 => bail!("dataset: ID is negative"),
        Ok(id) => u64::try_from(id).map_err(|_| anyhow::anyhow!("dataset: ID is too large")),
        Err(_) => bail!("dataset: ID is not an integer"),
    }
}

/// Parses an [`Instance`] from a line of whitespace separated non-negative integers:
/// the knapsack capacity, followed by a (price, weight) pair for every item.
/// The total weight and the total price of the items must stay below `u64::MAX`.
pub fn import_instance(line: &str) -> Result<Instance> {
    let mut numbers = vec![];
    for token in line.split_whitespace() {
        let n = match token.parse::<i128>() {
            Ok(n) if n < 0 => bail!("dataset: instance desctiption contains negative number"),
            Ok(n) => n,
            Err(_) => bail!("dataset: instance desctiption does not contain only integers"),
        };
        match u64::try_from(n) {
            Ok(n) => numbers.push(n),
            Err(_) => bail!("dataset: instance desctiption contains too large number {token}"),
        }
    }
    ensure!(!numbers.is_empty(), "dataset: missing knapsack capacity");
    ensure!(numbers.len() % 2 == 1, "dataset: missing pairs (price, weight)");

    let items = numbers[1..]
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| Item::new(pair[0], pair[1], index))
        .collect::<Vec<_>>();
    ensure!(
        Instance::checked_total(items.iter().map(|i| i.weight)).is_some(),
        "dataset: total weight of the items is too large"
    );
    ensure!(
        Instance::checked_total(items.iter().map(|i| i.price)).is_some(),
        "dataset: total price of the items is too large"
    );

    Ok(Instance::new(numbers[0], items))
}
