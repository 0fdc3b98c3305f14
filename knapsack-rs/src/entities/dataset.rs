use crate::entities::Instance;
use serde::{Deserialize, Serialize};

/// Set of instances identified by an ID, solved together to compute aggregate statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: u64,
    pub instances: Vec<Instance>,
}

impl Dataset {
    pub fn new(id: u64, instances: Vec<Instance>) -> Self {
        Self { id, instances }
    }

    pub fn n_instances(&self) -> usize {
        self.instances.len()
    }
}
