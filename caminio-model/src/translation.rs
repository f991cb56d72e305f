use serde_json::{Map, Value};

/// Key under which raw payloads embed their translation variants.
pub const TRANSLATIONS_KEY: &str = "translations";

/// Fields copied verbatim from the selected translation.
pub const PLAIN_FIELDS: [&str; 5] = [
    "title",
    "subtitle",
    "metaDescription",
    "metaKeywords",
    "categories",
];

/// Fields holding markdown source that is rendered before projection.
pub const RICH_TEXT_FIELDS: [&str; 2] = ["content", "aside"];

/// One locale variant of an entity's textual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub locale: Option<String>,
    pub fields: Map<String, Value>,
}

impl Translation {
    /// Reads a translation from its JSON form. Non-object entries yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let locale = object
            .get("locale")
            .and_then(Value::as_str)
            .map(str::to_string);
        Some(Self {
            locale,
            fields: object.clone(),
        })
    }

    /// Reads every well-formed entry of a `translations` array, in order.
    ///
    /// Anything other than an array produces an empty list.
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        value
            .as_array()
            .map(|entries| entries.iter().filter_map(Self::from_value).collect())
            .unwrap_or_default()
    }

    pub fn is_locale(&self, locale: &str) -> bool {
        self.locale.as_deref() == Some(locale)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}
