use std::collections::HashMap;
use std::sync::Arc;

use caminio_model::{
    CategoryFacet, Entity, EntityId, EntityKind, ModelResult, RawEntity,
};
use parking_lot::RwLock;
use tracing::debug;

use crate::translation::TranslationResolver;

#[derive(Debug, Default)]
struct KindStore {
    entries: Vec<Arc<Entity>>,
    index: HashMap<EntityId, usize>,
}

/// In-memory entity store, one table per entity kind.
///
/// Entries never expire. Re-inserting an id replaces the stored entity in
/// place; references handed out earlier keep pointing at the old one.
#[derive(Debug)]
pub struct EntityCache {
    resolver: TranslationResolver,
    stores: RwLock<HashMap<EntityKind, KindStore>>,
}

impl EntityCache {
    pub fn new(resolver: TranslationResolver) -> Self {
        Self {
            resolver,
            stores: RwLock::new(HashMap::new()),
        }
    }

    pub fn resolver(&self) -> &TranslationResolver {
        &self.resolver
    }

    /// Resolves translations on `attrs`, builds the entity and stores it.
    pub fn insert(
        &self,
        kind: EntityKind,
        attrs: RawEntity,
    ) -> ModelResult<Arc<Entity>> {
        let entity = Arc::new(Entity::from_raw(kind, self.resolver.resolve(attrs))?);

        let mut stores = self.stores.write();
        let store = stores.entry(kind).or_default();
        match store.index.get(entity.id()) {
            Some(&position) => {
                debug!(%kind, id = %entity.id(), "replacing cached entity");
                store.entries[position] = Arc::clone(&entity);
            }
            None => {
                store
                    .index
                    .insert(entity.id().clone(), store.entries.len());
                store.entries.push(Arc::clone(&entity));
            }
        }

        Ok(entity)
    }

    pub fn find_by_id(&self, kind: EntityKind, id: &str) -> Option<Arc<Entity>> {
        let stores = self.stores.read();
        let store = stores.get(&kind)?;
        store
            .index
            .get(id)
            .map(|&position| Arc::clone(&store.entries[position]))
    }

    /// Every cached entity of `kind`, in insertion order.
    pub fn all(&self, kind: EntityKind) -> Vec<Arc<Entity>> {
        self.stores
            .read()
            .get(&kind)
            .map(|store| store.entries.clone())
            .unwrap_or_default()
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        self.stores
            .read()
            .get(&kind)
            .map_or(0, |store| store.entries.len())
    }

    pub fn is_empty(&self, kind: EntityKind) -> bool {
        self.len(kind) == 0
    }

    /// Tallies the `categories` of every cached entity of `kind`.
    ///
    /// Facets come out in the order their name was first seen.
    pub fn category_facets(&self, kind: EntityKind) -> Vec<CategoryFacet> {
        let mut facets: Vec<CategoryFacet> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for entity in self.all(kind) {
            for category in entity.categories() {
                match positions.get(category) {
                    Some(&position) => facets[position].count += 1,
                    None => {
                        positions.insert(category.to_string(), facets.len());
                        facets.push(CategoryFacet::new(category));
                    }
                }
            }
        }

        facets
    }
}
