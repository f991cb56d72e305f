use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::ids::EntityId;
use crate::kind::EntityKind;
use crate::mediafile::Mediafile;

/// Untyped payload as it comes off the wire.
pub type RawEntity = Map<String, Value>;

/// A cached domain record.
///
/// Attributes are immutable once the entity is built; only the attached
/// mediafiles change afterwards, which is why they live behind a lock.
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    attributes: RawEntity,
    mediafiles: RwLock<Vec<Arc<Mediafile>>>,
}

impl Entity {
    /// Builds an entity from an already translated payload.
    pub fn from_raw(kind: EntityKind, attributes: RawEntity) -> Result<Self> {
        let id = attributes
            .get("_id")
            .and_then(EntityId::from_json)
            .ok_or(ModelError::MissingId { kind })?;

        Ok(Self {
            id,
            kind,
            attributes,
            mediafiles: RwLock::new(Vec::new()),
        })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn attributes(&self) -> &RawEntity {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn str_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.str_attribute("title")
    }

    /// Looks up a nested attribute with a JSON pointer, e.g.
    /// `/lineup_jobs/0/lineup_person/_id`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let rest = pointer.strip_prefix('/')?;
        let (head, tail) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, ""),
        };
        let value = self.attributes.get(head)?;
        if tail.is_empty() {
            Some(value)
        } else {
            value.pointer(tail)
        }
    }

    /// String entries of the list-valued `categories` attribute.
    pub fn categories(&self) -> Vec<&str> {
        self.attribute("categories")
            .and_then(Value::as_array)
            .map(|cats| cats.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Venue of a lineup entry: the org of its first event.
    pub fn venue(&self) -> Option<&Value> {
        self.pointer("/lineup_events/0/lineup_org")
    }

    /// Coach of a lineup entry: the person of its first job.
    pub fn coach(&self) -> Option<&Value> {
        self.pointer("/lineup_jobs/0/lineup_person")
    }

    /// Snapshot of the attached mediafiles, in attach order.
    pub fn mediafiles(&self) -> Vec<Arc<Mediafile>> {
        self.mediafiles.read().clone()
    }

    pub fn mediafile_count(&self) -> usize {
        self.mediafiles.read().len()
    }

    /// First attached mediafile.
    pub fn lead_mediafile(&self) -> Option<Arc<Mediafile>> {
        self.mediafiles.read().first().cloned()
    }

    pub fn teaser(&self) -> Option<Arc<Mediafile>> {
        self.lead_mediafile()
    }

    pub fn coach_pic(&self) -> Option<Arc<Mediafile>> {
        self.lead_mediafile()
    }

    /// Appends a mediafile. Returns `true` when it became the lead file.
    pub fn attach_mediafile(&self, file: Arc<Mediafile>) -> bool {
        let mut files = self.mediafiles.write();
        files.push(file);
        files.len() == 1
    }

    /// JSON view handed to renderers: attributes plus `mediafiles` and the
    /// lead slot (`teaser` or `coachPic`).
    pub fn to_json(&self) -> Value {
        let mut out = self.attributes.clone();
        let files = self.mediafiles.read();
        out.insert(
            "mediafiles".to_string(),
            Value::Array(
                files
                    .iter()
                    .filter_map(|f| serde_json::to_value(f.as_ref()).ok())
                    .collect(),
            ),
        );
        if let Some(lead) = files.first()
            && let Ok(value) = serde_json::to_value(lead.as_ref())
        {
            out.insert(
                self.kind.lead_media_slot().attribute_name().to_string(),
                value,
            );
        }
        Value::Object(out)
    }
}
