use std::sync::Arc;

use caminio_config::{Config, ConfigLoader};
use caminio_contracts::JsonSource;
use caminio_model::{CategoryFacet, EntityKind};
use tracing::info;

use crate::cache::EntityCache;
use crate::error::Result;
use crate::finder::EntityFinder;
use crate::http::HttpJsonClient;
use crate::kinds::{LineupEntry, ShopItem};
use crate::related::RelatedResourceLoader;
use crate::translation::TranslationResolver;

/// Entry point wiring transport, cache and finders for one caminio host.
///
/// Cloning is cheap; clones share the cache.
#[derive(Debug, Clone)]
pub struct CaminioClient {
    cache: Arc<EntityCache>,
    shop_items: EntityFinder<ShopItem>,
    lineup_entries: EntityFinder<LineupEntry>,
}

impl CaminioClient {
    /// Builds an HTTP-backed client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpJsonClient::new(&config.api, &config.http)?;
        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Loads configuration from file and environment, then builds the client.
    pub fn from_env() -> Result<Self> {
        let load = ConfigLoader::new().load()?;
        load.warnings.log();
        Self::from_config(&load.config)
    }

    /// Builds a client on top of an arbitrary JSON source.
    pub fn with_source(config: &Config, source: Arc<dyn JsonSource>) -> Self {
        let resolver = TranslationResolver::with_default_renderer(config.api.lang.clone());
        let cache = Arc::new(EntityCache::new(resolver));
        let loader = RelatedResourceLoader::new(Arc::clone(&source), config.api.file_base());

        info!(
            lang = %config.api.lang,
            file_base = %loader.file_base(),
            "caminio client ready"
        );

        Self {
            shop_items: EntityFinder::new(
                Arc::clone(&source),
                Arc::clone(&cache),
                loader.clone(),
            ),
            lineup_entries: EntityFinder::new(source, Arc::clone(&cache), loader),
            cache,
        }
    }

    pub fn shop_items(&self) -> &EntityFinder<ShopItem> {
        &self.shop_items
    }

    pub fn lineup_entries(&self) -> &EntityFinder<LineupEntry> {
        &self.lineup_entries
    }

    pub fn cache(&self) -> &Arc<EntityCache> {
        &self.cache
    }

    /// Category counts over the shop items cached so far.
    pub fn shop_item_categories(&self) -> Vec<CategoryFacet> {
        self.cache.category_facets(EntityKind::ShopItem)
    }
}
