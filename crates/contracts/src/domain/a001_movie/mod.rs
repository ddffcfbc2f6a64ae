//! Movie catalog entry: draft state and submission payload

pub mod draft;
pub mod submission;

pub use draft::{DraftError, MovieDraft};
pub use submission::AddMovieResponse;
