use caminio_model::{Conditions, Entity, EntityId, EntityKind};

/// Identifier used to match batched mediafiles back to their owner.
///
/// Each entity type decides where that id lives: shop items own their
/// files directly, lineup entries borrow the portrait of their coach.
pub trait HasCorrelationId {
    fn correlation_id(entity: &Entity) -> Option<EntityId>;
}

/// Static description of a fetchable entity collection.
pub trait EntityType: HasCorrelationId + Send + Sync + 'static {
    const KIND: EntityKind;

    /// Collection path relative to the API namespace.
    const COLLECTION: &'static str;

    /// Conditions that are always sent and cannot be overridden by callers.
    fn default_conditions() -> Conditions {
        Conditions::new()
    }
}
