//! Fetch, translate, cache and enrich entities of one type.

use std::marker::PhantomData;
use std::sync::Arc;

use caminio_contracts::{EntityType, JsonSource};
use caminio_model::{Conditions, Entity, EntityId};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cache::EntityCache;
use crate::error::{CoreError, Result};
use crate::query::merge_conditions;
use crate::related::RelatedResourceLoader;

/// What the caller asks a finder for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindRequest {
    /// One entity. `base` narrows the list fetched when the cache is cold.
    ById { id: EntityId, base: Conditions },
    /// Every entity matching the conditions.
    Where(Conditions),
}

impl FindRequest {
    pub fn id(id: impl Into<EntityId>) -> Self {
        Self::ById {
            id: id.into(),
            base: Conditions::new(),
        }
    }

    pub fn by_id_with(id: impl Into<EntityId>, base: Conditions) -> Self {
        Self::ById {
            id: id.into(),
            base,
        }
    }

    pub fn conditions<I, K, V>(conditions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Where(conditions.into_iter().collect())
    }
}

/// Result of [`EntityFinder::find`]; the variant follows the request.
#[derive(Debug, Clone)]
pub enum Found {
    One(Arc<Entity>),
    Many(Vec<Arc<Entity>>),
}

impl Found {
    pub fn into_one(self) -> Option<Arc<Entity>> {
        match self {
            Found::One(entity) => Some(entity),
            Found::Many(_) => None,
        }
    }

    /// Always a list; a single result becomes a one-element list.
    pub fn into_many(self) -> Vec<Arc<Entity>> {
        match self {
            Found::One(entity) => vec![entity],
            Found::Many(entities) => entities,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Found::One(_) => 1,
            Found::Many(entities) => entities.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct EntityFinder<T: EntityType> {
    source: Arc<dyn JsonSource>,
    cache: Arc<EntityCache>,
    loader: RelatedResourceLoader,
    _kind: PhantomData<fn() -> T>,
}

impl<T: EntityType> std::fmt::Debug for EntityFinder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityFinder")
            .field("kind", &T::KIND)
            .field("collection", &T::COLLECTION)
            .field("cached", &self.cache.len(T::KIND))
            .finish()
    }
}

impl<T: EntityType> Clone for EntityFinder<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            cache: Arc::clone(&self.cache),
            loader: self.loader.clone(),
            _kind: PhantomData,
        }
    }
}

impl<T: EntityType> EntityFinder<T> {
    pub fn new(
        source: Arc<dyn JsonSource>,
        cache: Arc<EntityCache>,
        loader: RelatedResourceLoader,
    ) -> Self {
        Self {
            source,
            cache,
            loader,
            _kind: PhantomData,
        }
    }

    pub async fn find(&self, request: FindRequest) -> Result<Found> {
        match request {
            FindRequest::ById { id, base } => {
                self.find_by_id(id.as_str(), base).await.map(Found::One)
            }
            FindRequest::Where(conditions) => {
                self.find_where(conditions).await.map(Found::Many)
            }
        }
    }

    /// Looks `id` up in the cache. A cold cache is filled first by fetching
    /// the list narrowed by `base`; a warm cache never goes to the network.
    pub async fn find_by_id(&self, id: &str, base: Conditions) -> Result<Arc<Entity>> {
        if !self.cache.is_empty(T::KIND) {
            return match self.cache.find_by_id(T::KIND, id) {
                Some(entity) => {
                    debug!(kind = %T::KIND, id, "cache hit");
                    Ok(entity)
                }
                None => Err(self.not_found(id)),
            };
        }

        let fetched = self.fetch_and_attach(&base).await?;
        fetched
            .into_iter()
            .find(|entity| entity.id() == id)
            .ok_or_else(|| self.not_found(id))
    }

    /// Fetches every entity matching `conditions`, always as a list.
    pub async fn find_where(&self, conditions: Conditions) -> Result<Vec<Arc<Entity>>> {
        self.fetch_and_attach(&conditions).await
    }

    /// Entities of this type already in the cache.
    pub fn cached(&self) -> Vec<Arc<Entity>> {
        self.cache.all(T::KIND)
    }

    async fn fetch_and_attach(&self, conditions: &Conditions) -> Result<Vec<Arc<Entity>>> {
        let query = merge_conditions(conditions, &T::default_conditions());
        let body = self.source.get_json(T::COLLECTION, &query).await?;

        let Value::Array(items) = body else {
            return Err(CoreError::UnexpectedShape {
                path: T::COLLECTION.to_string(),
                expected: "an array of entities",
            });
        };

        let received = items.len();
        let mut entities = Vec::with_capacity(received);
        for item in items {
            let Value::Object(attrs) = item else {
                warn!(kind = %T::KIND, "skipping non-object payload");
                continue;
            };
            match self.cache.insert(T::KIND, attrs) {
                Ok(entity) => entities.push(entity),
                Err(err) => warn!(kind = %T::KIND, "skipping payload: {}", err),
            }
        }

        info!(
            "Cached {} of {} {} from {}",
            entities.len(),
            received,
            T::KIND,
            T::COLLECTION
        );

        self.loader.attach_mediafiles::<T>(entities).await
    }

    fn not_found(&self, id: &str) -> CoreError {
        CoreError::NotFound {
            kind: T::KIND,
            id: EntityId::from(id),
        }
    }
}
