//! Batched loading of mediafiles for a set of entities.
//!
//! Instead of one request per entity, the loader collects the correlation
//! id of every entity in the batch, issues a single `parent=in(...)` query
//! and distributes the returned files back to their owners.

use std::collections::HashMap;
use std::sync::Arc;

use caminio_contracts::{HasCorrelationId, JsonSource};
use caminio_model::{Conditions, Entity, EntityId, Mediafile};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{CoreError, Result};
use crate::query::parent_in;

/// Collection the mediafiles are served from.
pub const MEDIAFILES_PATH: &str = "mediafiles";

#[derive(Debug, Clone)]
pub struct RelatedResourceLoader {
    source: Arc<dyn JsonSource>,
    file_base: String,
}

impl RelatedResourceLoader {
    /// `file_base` prefixes every mediafile download URL.
    pub fn new(source: Arc<dyn JsonSource>, file_base: impl Into<String>) -> Self {
        Self {
            source,
            file_base: file_base.into(),
        }
    }

    pub fn file_base(&self) -> &str {
        &self.file_base
    }

    /// Fetches the mediafiles of `entities` in one request and attaches each
    /// file to every owner whose correlation id equals the file's `parent`.
    ///
    /// The response is decoded completely before anything is attached, so a
    /// failure leaves every entity untouched. Returns the input unchanged in
    /// order.
    pub async fn attach_mediafiles<T: HasCorrelationId>(
        &self,
        entities: Vec<Arc<Entity>>,
    ) -> Result<Vec<Arc<Entity>>> {
        let mut ids: Vec<EntityId> = Vec::new();
        let mut owners: HashMap<EntityId, Vec<Arc<Entity>>> = HashMap::new();

        for entity in &entities {
            let Some(id) = T::correlation_id(entity) else {
                debug!(entity = %entity.id(), "no correlation id, skipping mediafiles");
                continue;
            };
            let slot = owners.entry(id.clone()).or_default();
            if slot.is_empty() {
                ids.push(id);
            }
            slot.push(Arc::clone(entity));
        }

        if ids.is_empty() {
            return Ok(entities);
        }

        let query = Conditions::new().with("parent", parent_in(&ids));
        let body = self.source.get_json(MEDIAFILES_PATH, &query).await?;
        let files = self.decode(body)?;

        info!(
            "Attaching {} mediafiles to {} owners",
            files.len(),
            ids.len()
        );

        for file in files {
            let matched = file.parent.as_ref().and_then(|parent| owners.get(parent));
            let Some(matched) = matched else {
                warn!(
                    file = ?file.id,
                    parent = ?file.parent,
                    "mediafile has no owner in this batch, dropping"
                );
                continue;
            };

            let file = Arc::new(file);
            for owner in matched {
                if owner.attach_mediafile(Arc::clone(&file)) {
                    debug!(
                        owner = %owner.id(),
                        slot = owner.kind().lead_media_slot().attribute_name(),
                        "set lead mediafile"
                    );
                }
            }
        }

        Ok(entities)
    }

    fn decode(&self, body: Value) -> Result<Vec<Mediafile>> {
        let Value::Array(items) = body else {
            return Err(CoreError::UnexpectedShape {
                path: MEDIAFILES_PATH.to_string(),
                expected: "an array of mediafiles",
            });
        };

        items
            .into_iter()
            .map(|item| {
                serde_json::from_value::<Mediafile>(item)
                    .map(|file| file.with_base_url(&self.file_base))
                    .map_err(|err| CoreError::Model(err.into()))
            })
            .collect()
    }
}
