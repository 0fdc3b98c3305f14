use itertools::Itertools;

use crate::entities::{Dataset, Instance};

/// Renders an [`Instance`] as a single line: the capacity followed by a (price, weight) pair per item
pub fn export_instance(instance: &Instance) -> String {
    std::iter::once(instance.capacity)
        .chain(instance.items.iter().flat_map(|item| [item.price, item.weight]))
        .join(" ")
}

/// Renders a [`Dataset`] as its ID line followed by one line per instance.
/// The output is accepted by [`import_dataset`](crate::io::import::import_dataset).
pub fn export_dataset(dataset: &Dataset) -> String {
    let mut s = format!("{}\n", dataset.id);
    for instance in &dataset.instances {
        s.push_str(&export_instance(instance));
        s.push('\n');
    }
    s
}
