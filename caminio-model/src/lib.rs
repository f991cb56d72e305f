//! Core data model definitions shared across caminio crates.
#![allow(missing_docs)]

pub mod conditions;
pub mod entity;
pub mod error;
pub mod facet;
pub mod ids;
pub mod kind;
pub mod mediafile;
pub mod translation;

pub use conditions::Conditions;
pub use entity::{Entity, RawEntity};
pub use error::{ModelError, Result as ModelResult};
pub use facet::CategoryFacet;
pub use ids::EntityId;
pub use kind::{EntityKind, LeadMediaSlot};
pub use mediafile::Mediafile;
pub use translation::Translation;
