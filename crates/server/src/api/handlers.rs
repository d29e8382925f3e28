mod admin;
mod media;

pub use admin::*;
pub use media::*;
