//! Locale selection and projection of translated fields.
//!
//! Raw payloads carry every locale variant in a `translations` array. The
//! resolver picks one variant (preferred locale, then `en`, then the first
//! entry) and copies its textual fields onto the flat attribute set. Broken
//! entries never fail a resolve; they are just not candidates.

use std::sync::Arc;

use caminio_contracts::MarkupRenderer;
use caminio_model::RawEntity;
use caminio_model::translation::{
    PLAIN_FIELDS, RICH_TEXT_FIELDS, TRANSLATIONS_KEY, Translation,
};
use serde_json::Value;
use tracing::trace;

use crate::markup::CommonMarkRenderer;

/// Locale every payload is expected to carry as a fallback.
pub const FALLBACK_LOCALE: &str = "en";

/// Picks the variant for `preferred`, falling back to `en`, then to the first.
pub fn select_translation<'a>(
    translations: &'a [Translation],
    preferred: &str,
) -> Option<&'a Translation> {
    translations
        .iter()
        .find(|tr| tr.is_locale(preferred))
        .or_else(|| translations.iter().find(|tr| tr.is_locale(FALLBACK_LOCALE)))
        .or_else(|| translations.first())
}

#[derive(Debug, Clone)]
pub struct TranslationResolver {
    preferred_locale: String,
    renderer: Arc<dyn MarkupRenderer>,
}

impl TranslationResolver {
    pub fn new(
        preferred_locale: impl Into<String>,
        renderer: Arc<dyn MarkupRenderer>,
    ) -> Self {
        Self {
            preferred_locale: preferred_locale.into(),
            renderer,
        }
    }

    /// Resolver rendering rich text with [`CommonMarkRenderer`].
    pub fn with_default_renderer(preferred_locale: impl Into<String>) -> Self {
        Self::new(preferred_locale, Arc::new(CommonMarkRenderer::default()))
    }

    pub fn preferred_locale(&self) -> &str {
        &self.preferred_locale
    }

    /// Flattens the selected translation onto `raw` and drops the
    /// `translations` array. Payloads without usable translations are
    /// returned untouched.
    pub fn resolve(&self, mut raw: RawEntity) -> RawEntity {
        let translations = match raw.get(TRANSLATIONS_KEY) {
            Some(value) => Translation::list_from_value(value),
            None => return raw,
        };
        let Some(selected) =
            select_translation(&translations, &self.preferred_locale)
        else {
            return raw;
        };

        trace!(
            locale = selected.locale.as_deref().unwrap_or("<none>"),
            preferred = %self.preferred_locale,
            "resolved translation"
        );

        for field in PLAIN_FIELDS {
            if let Some(value) = selected.field(field) {
                raw.insert(field.to_string(), value.clone());
            }
        }

        for field in RICH_TEXT_FIELDS {
            if let Some(value) = selected.field(field) {
                let rendered = match value.as_str() {
                    Some(source) if !source.is_empty() => {
                        self.renderer.render(source)
                    }
                    _ => String::new(),
                };
                raw.insert(field.to_string(), Value::String(rendered));
            }
        }

        raw.remove(TRANSLATIONS_KEY);
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct Shout;

    impl MarkupRenderer for Shout {
        fn render(&self, source: &str) -> String {
            source.to_uppercase()
        }
    }

    fn resolver(locale: &str) -> TranslationResolver {
        TranslationResolver::new(locale, Arc::new(Shout))
    }

    fn raw(value: Value) -> RawEntity {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn falls_back_to_english() {
        let resolved = resolver("de").resolve(raw(json!({
            "_id": "1",
            "translations": [
                { "locale": "fr", "title": "A" },
                { "locale": "en", "title": "B" }
            ]
        })));

        assert_eq!(resolved["title"], json!("B"));
        assert!(!resolved.contains_key("translations"));
    }

    #[test]
    fn falls_back_to_first_entry() {
        let resolved = resolver("de").resolve(raw(json!({
            "_id": "1",
            "translations": [{ "locale": "fr", "title": "A" }]
        })));

        assert_eq!(resolved["title"], json!("A"));
    }

    #[test]
    fn preferred_locale_wins() {
        let resolved = resolver("fr").resolve(raw(json!({
            "_id": "1",
            "translations": [
                { "locale": "en", "title": "B" },
                { "locale": "fr", "title": "A" }
            ]
        })));

        assert_eq!(resolved["title"], json!("A"));
    }

    #[test]
    fn projects_plain_and_rich_fields() {
        let resolved = resolver("en").resolve(raw(json!({
            "_id": "1",
            "title": "stale",
            "price": 12,
            "translations": [{
                "locale": "en",
                "title": "Fresh",
                "subtitle": "Sub",
                "metaDescription": "desc",
                "metaKeywords": "a,b",
                "categories": ["books", "gifts"],
                "content": "body",
                "aside": "",
                "unrelated": "ignored"
            }]
        })));

        assert_eq!(resolved["title"], json!("Fresh"));
        assert_eq!(resolved["subtitle"], json!("Sub"));
        assert_eq!(resolved["metaDescription"], json!("desc"));
        assert_eq!(resolved["metaKeywords"], json!("a,b"));
        assert_eq!(resolved["categories"], json!(["books", "gifts"]));
        assert_eq!(resolved["content"], json!("BODY"));
        assert_eq!(resolved["aside"], json!(""));
        assert_eq!(resolved["price"], json!(12));
        assert!(!resolved.contains_key("unrelated"));
    }

    #[test]
    fn null_rich_text_becomes_empty_string() {
        let resolved = resolver("en").resolve(raw(json!({
            "_id": "1",
            "translations": [{ "locale": "en", "content": null }]
        })));

        assert_eq!(resolved["content"], json!(""));
        assert!(!resolved.contains_key("aside"));
    }

    #[test]
    fn missing_or_empty_translations_leave_input_unchanged() {
        let without = raw(json!({ "_id": "1", "title": "x" }));
        assert_eq!(resolver("de").resolve(without.clone()), without);

        let empty = raw(json!({ "_id": "1", "title": "x", "translations": [] }));
        assert_eq!(resolver("de").resolve(empty.clone()), empty);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let resolved = resolver("de").resolve(raw(json!({
            "_id": "1",
            "translations": [null, "junk", { "locale": "it", "title": "Ciao" }]
        })));

        assert_eq!(resolved["title"], json!("Ciao"));
    }
}
