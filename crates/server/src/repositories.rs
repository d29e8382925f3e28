mod media;

pub use media::SqliteMediaRepository;
