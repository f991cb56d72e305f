use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ids::{EntityId, deserialize_optional_id};

/// Media asset owned by another entity, as returned by `/mediafiles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mediafile {
    #[serde(
        rename = "_id",
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<EntityId>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<EntityId>,
    #[serde(rename = "relPath", default)]
    pub rel_path: String,
    /// Absolute download URL, filled in when the file is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Mediafile {
    /// Computes `url` as `<base>/files/<relPath>`.
    pub fn with_base_url(mut self, base: &str) -> Self {
        self.url = Some(format!(
            "{}/files/{}",
            base.trim_end_matches('/'),
            self.rel_path.trim_start_matches('/')
        ));
        self
    }
}
