mod support;

use std::sync::Arc;

use caminio_contracts::JsonSource;
use caminio_core::{
    CoreError, EntityCache, RelatedResourceLoader, ShopItem, TranslationResolver,
};
use caminio_model::{Entity, EntityKind};
use serde_json::json;
use support::StubSource;

fn shop_items(cache: &EntityCache, ids: &[&str]) -> Vec<Arc<Entity>> {
    ids.iter()
        .map(|id| {
            let attrs = json!({ "_id": id }).as_object().cloned().expect("object");
            cache.insert(EntityKind::ShopItem, attrs).expect("insert")
        })
        .collect()
}

fn fixture(file_base: &str) -> (Arc<StubSource>, RelatedResourceLoader, EntityCache) {
    let source = StubSource::new();
    let dyn_source: Arc<dyn JsonSource> = source.clone();
    let loader = RelatedResourceLoader::new(dyn_source, file_base);
    let cache = EntityCache::new(TranslationResolver::with_default_renderer("en"));
    (source, loader, cache)
}

#[tokio::test]
async fn one_request_serves_the_whole_batch() {
    let (source, loader, cache) = fixture("https://camin.io");
    source.respond(
        "mediafiles",
        json!([{ "_id": "m1", "parent": "2", "relPath": "shop/2.jpg" }]),
    );
    let entities = shop_items(&cache, &["1", "2", "3"]);

    let entities = loader
        .attach_mediafiles::<ShopItem>(entities)
        .await
        .expect("attach");

    let calls = source.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "mediafiles");
    assert_eq!(calls[0].query.get("parent"), Some("in(1,2,3)"));

    assert_eq!(entities[0].mediafile_count(), 0);
    assert_eq!(entities[2].mediafile_count(), 0);
    let teaser = entities[1].teaser().expect("teaser");
    assert_eq!(teaser.id.as_ref().map(|id| id.as_str()), Some("m1"));
    assert!(Arc::ptr_eq(&teaser, &entities[1].mediafiles()[0]));
    assert_eq!(
        teaser.url.as_deref(),
        Some("https://camin.io/files/shop/2.jpg")
    );
}

#[tokio::test]
async fn empty_batch_does_not_fetch() {
    let (source, loader, _cache) = fixture("https://camin.io");

    let entities = loader
        .attach_mediafiles::<ShopItem>(Vec::new())
        .await
        .expect("noop");

    assert!(entities.is_empty());
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn fetch_failure_attaches_nothing() {
    let (source, loader, cache) = fixture("https://camin.io");
    source.fail("mediafiles", 503);
    let entities = shop_items(&cache, &["1", "2"]);

    let err = loader
        .attach_mediafiles::<ShopItem>(entities.clone())
        .await
        .expect_err("fails");

    assert!(matches!(err, CoreError::Fetch(_)));
    assert!(entities.iter().all(|e| e.mediafile_count() == 0));
}

#[tokio::test]
async fn malformed_element_attaches_nothing() {
    let (source, loader, cache) = fixture("https://camin.io");
    source.respond(
        "mediafiles",
        json!([
            { "_id": "m1", "parent": "1", "relPath": "a.jpg" },
            { "_id": "m2", "parent": "1", "relPath": 42 }
        ]),
    );
    let entities = shop_items(&cache, &["1"]);

    let err = loader
        .attach_mediafiles::<ShopItem>(entities.clone())
        .await
        .expect_err("decode fails");

    assert!(matches!(err, CoreError::Model(_)));
    assert_eq!(entities[0].mediafile_count(), 0);
}

#[tokio::test]
async fn urls_prefer_the_file_host() {
    let (source, loader, cache) = fixture("https://files.camin.io/");
    source.respond(
        "mediafiles",
        json!([{ "_id": "m1", "parent": "1", "relPath": "/x/y.png" }]),
    );
    let entities = shop_items(&cache, &["1"]);

    let entities = loader
        .attach_mediafiles::<ShopItem>(entities)
        .await
        .expect("attach");

    assert_eq!(
        entities[0].teaser().and_then(|t| t.url.clone()).as_deref(),
        Some("https://files.camin.io/files/x/y.png")
    );
}

#[tokio::test]
async fn orphans_are_dropped_and_order_kept() {
    let (source, loader, cache) = fixture("https://camin.io");
    source.respond(
        "mediafiles",
        json!([
            { "_id": "stray", "parent": "99", "relPath": "s.jpg" },
            { "_id": "a", "parent": "1", "relPath": "a.jpg" },
            { "_id": "b", "parent": "1", "relPath": "b.jpg" }
        ]),
    );
    let entities = shop_items(&cache, &["1", "1"]);

    let entities = loader
        .attach_mediafiles::<ShopItem>(entities)
        .await
        .expect("attach");

    // the second insert replaced the first in the cache but both handles
    // share the correlation id, so both get the files
    assert_eq!(source.calls()[0].query.get("parent"), Some("in(1)"));
    for entity in &entities {
        let ids: Vec<String> = entity
            .mediafiles()
            .iter()
            .filter_map(|f| f.id.as_ref().map(|id| id.to_string()))
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
