pub mod genre;
pub mod platform;

pub use genre::{GENRES, MAX_GENRES};
pub use platform::Platform;
