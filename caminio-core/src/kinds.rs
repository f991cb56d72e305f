//! The entity types the client knows how to fetch.

use caminio_contracts::{EntityType, HasCorrelationId};
use caminio_model::{Conditions, Entity, EntityId, EntityKind};

/// Products listed in the shop. Mediafiles are owned by the item itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShopItem;

impl HasCorrelationId for ShopItem {
    fn correlation_id(entity: &Entity) -> Option<EntityId> {
        Some(entity.id().clone())
    }
}

impl EntityType for ShopItem {
    const KIND: EntityKind = EntityKind::ShopItem;
    const COLLECTION: &'static str = "shop_items";

    fn default_conditions() -> Conditions {
        Conditions::new().with("status", "published")
    }
}

/// Workshop lineup entries. Their mediafiles hang off the coach, i.e. the
/// person of the first lineup job.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineupEntry;

impl LineupEntry {
    pub const COACH_ID_POINTER: &'static str = "/lineup_jobs/0/lineup_person/_id";
}

impl HasCorrelationId for LineupEntry {
    fn correlation_id(entity: &Entity) -> Option<EntityId> {
        entity
            .pointer(Self::COACH_ID_POINTER)
            .and_then(EntityId::from_json)
    }
}

impl EntityType for LineupEntry {
    const KIND: EntityKind = EntityKind::LineupEntry;
    const COLLECTION: &'static str = "lineup_entries/events";
}
