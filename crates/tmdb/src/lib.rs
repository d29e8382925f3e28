mod client;
mod error;
mod movie;
mod popular;
mod tv;
pub mod models;

pub use client::{TmdbClient, DEFAULT_LANGUAGE};
pub use error::TmdbError;
pub use models::{ErrorResponse, Genre, ListPage, Movie, PaginatedResponse, TvShow};

pub type Result<T> = std::result::Result<T, TmdbError>;
