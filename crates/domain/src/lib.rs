//! Domain layer for the popular-media catalog.
//!
//! This crate holds the canonical media model and the rules around it. It is
//! independent of the database, the HTTP API and the metadata provider.
//!
//! - **media**: `MediaRecord` entity, `UpsertMediaRequest`, `MediaType`, and
//!   the `MediaRepository` trait implemented by the infrastructure layer
//! - **genre**: static genre ID → name lookup, partitioned by media type

pub mod error;
pub mod genre;
pub mod media;

pub use error::{DomainError, DomainResult};
pub use genre::{join_genres, GenreResolution, GenreTable, GENRE_SEPARATOR};
pub use media::{
    CreateMediaError, MediaRecord, MediaRepository, MediaType, ParseMediaTypeError, SampleOrder,
    UpsertMediaRequest,
};
