//! # caminio core
//!
//! Client-side data access for the caminio REST API.
//!
//! ## Overview
//!
//! - **Fetching**: [`http::HttpJsonClient`] issues authenticated GET requests
//!   and hands back parsed JSON.
//! - **Translations**: [`translation::TranslationResolver`] flattens the
//!   locale variant that best matches the configured language onto each
//!   entity, rendering markdown fields to HTML.
//! - **Caching**: [`cache::EntityCache`] memoizes entities per kind and id.
//! - **Related resources**: [`related::RelatedResourceLoader`] loads the
//!   mediafiles of a whole batch of entities in one request.
//! - **Finders**: [`finder::EntityFinder`] ties the steps together per
//!   entity type; [`client::CaminioClient`] wires everything from a
//!   [`caminio_config::Config`].
//!
//! ## Example
//!
//! ```no_run
//! use caminio_config::Config;
//! use caminio_core::{CaminioClient, finder::FindRequest};
//!
//! async fn list_published() -> caminio_core::Result<()> {
//!     let config = Config::new("https://camin.io", "my-api-key")?.with_lang("de");
//!     let client = CaminioClient::from_config(&config)?;
//!
//!     let items = client
//!         .shop_items()
//!         .find(FindRequest::conditions([("category", "books")]))
//!         .await?
//!         .into_many();
//!     for item in items {
//!         println!("{:?} teaser={:?}", item.title(), item.teaser().and_then(|t| t.url.clone()));
//!     }
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod cache;
pub mod client;
pub mod error;
pub mod finder;
pub mod http;
pub mod kinds;
pub mod markup;
pub mod query;
pub mod related;
pub mod telemetry;
pub mod translation;

pub use cache::EntityCache;
pub use client::CaminioClient;
pub use error::{CoreError, Result};
pub use finder::{EntityFinder, FindRequest, Found};
pub use http::HttpJsonClient;
pub use kinds::{LineupEntry, ShopItem};
pub use markup::CommonMarkRenderer;
pub use related::RelatedResourceLoader;
pub use translation::{TranslationResolver, select_translation};
