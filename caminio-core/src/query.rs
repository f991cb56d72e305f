//! Query shaping helpers.

use caminio_model::{Conditions, EntityId};

/// Merges caller conditions with type defaults. Defaults win on collision.
pub fn merge_conditions(caller: &Conditions, defaults: &Conditions) -> Conditions {
    let mut merged = caller.clone();
    merged.extend(defaults.iter());
    merged
}

/// Correlation filter value: `in(id1,id2,...)`.
pub fn parent_in(ids: &[EntityId]) -> String {
    let joined = ids
        .iter()
        .map(EntityId::as_str)
        .collect::<Vec<_>>()
        .join(",");
    format!("in({joined})")
}
