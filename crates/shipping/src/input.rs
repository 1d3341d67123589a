use serde::{Deserialize, Serialize};

use shiplink_core::{DomainError, DomainResult, OrderId};

/// Order-id argument as the host platform passes it: either one numeric id
/// or an explicit list. Any other shape is rejected before processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderIdsInput {
    One(i64),
    Many(Vec<i64>),
}

impl OrderIdsInput {
    /// Normalize into the ordered set of order ids to process.
    ///
    /// Duplicates are dropped, keeping the first occurrence, so
    /// `[7, 9, 7]` processes order 7 exactly once.
    pub fn normalize(&self) -> Vec<OrderId> {
        let ids: &[i64] = match self {
            OrderIdsInput::One(id) => core::slice::from_ref(id),
            OrderIdsInput::Many(ids) => ids,
        };

        let mut seen = std::collections::HashSet::new();
        ids.iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .map(OrderId::new)
            .collect()
    }

    /// Parse the raw JSON argument received from the platform.
    ///
    /// A non-numeric, non-list value fails with `InvalidInput`; the batch
    /// call processes nothing in that case.
    pub fn from_value(value: &serde_json::Value) -> DomainResult<Self> {
        serde_json::from_value(value.clone())
            .map_err(|_| DomainError::invalid_input(format!("orderIds must be a number or a list of numbers, got {value}")))
    }
}

impl From<i64> for OrderIdsInput {
    fn from(id: i64) -> Self {
        OrderIdsInput::One(id)
    }
}

impl From<Vec<i64>> for OrderIdsInput {
    fn from(ids: Vec<i64>) -> Self {
        OrderIdsInput::Many(ids)
    }
}
