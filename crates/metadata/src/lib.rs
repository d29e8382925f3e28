//! Metadata provider abstraction layer
//!
//! This crate turns provider payloads into canonical media records.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │               MediaProvider trait                 │
//! │  fetch_popular(MediaType) -> Vec<ListedRecord>    │
//! │  fetch_details(id, MediaType, lang) -> RawRecord  │
//! └───────────────────────────────────────────────────┘
//!                          △
//!                          │
//!                  ┌───────┴──────┐
//!                  │ TmdbProvider │
//!                  └──────────────┘
//!
//!   RawRecord ──► Normalizer (+ GenreTable) ──► UpsertMediaRequest
//! ```
//!
//! # Example
//!
//! ```ignore
//! use metadata::{MediaProvider, Normalizer, TmdbProvider};
//! use domain::{GenreTable, MediaType};
//! use std::sync::Arc;
//!
//! let provider = TmdbProvider::new(Arc::new(client));
//! let normalizer = Normalizer::new(Arc::new(GenreTable::default()));
//! for raw in provider.fetch_popular(MediaType::Movie).await? {
//!     let request = normalizer.normalize(&raw?)?;
//! }
//! ```

mod adapters;
mod error;
mod normalize;
mod provider;
mod raw;

pub use adapters::TmdbProvider;
pub use error::ProviderError;
pub use normalize::{parse_release_date, Normalizer};
pub use provider::{ListedRecord, MediaProvider};
pub use raw::RawRecord;
