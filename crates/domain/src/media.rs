//! Media domain module.
//!
//! Contains the canonical media record, its creation request, the media type
//! value object and the repository trait.

mod entity;
mod media_type;
mod repository;
mod request;

pub use entity::MediaRecord;
pub use media_type::{MediaType, ParseMediaTypeError};
pub use repository::{MediaRepository, SampleOrder};
pub use request::{CreateMediaError, UpsertMediaRequest};
