//! Trait surfaces that describe interactions with caminio data models.

pub mod entity_type;
pub mod fetch;
pub mod markup;

pub use entity_type::{EntityType, HasCorrelationId};
pub use fetch::{FetchError, JsonSource};
pub use markup::MarkupRenderer;

/// Frequently used trait combinators for the client and its callers.
pub mod prelude {
    pub use super::entity_type::{EntityType, HasCorrelationId};
    pub use super::fetch::{FetchError, JsonSource};
    pub use super::markup::MarkupRenderer;
}
