use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::{Platform, MAX_GENRES};

/// Errors a draft transition can reject with
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("You can select a maximum of {max} genres.")]
    TooManyGenres { max: usize },

    #[error("\"{0}\" is already in the cast list.")]
    DuplicateActor(String),
}

/// In-progress movie entry, held in memory for the lifetime of the form
///
/// The poster file is staged separately by the frontend: a file handle is
/// a DOM object and has no place in the wire contracts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub movie_name: String,
    pub release_date: String,
    pub budget: String,
    pub storyline: String,
    pub actors: Vec<String>,
    pub rating: f32,
    pub platform: Option<Platform>,
    pub trailer_link: String,
    pub platform_link: String,
    pub genres: Vec<String>,
}

impl MovieDraft {
    /// Replace the genre selection, enforcing the selection limit
    ///
    /// On rejection the current selection is left untouched.
    pub fn set_genres(&mut self, proposed: Vec<String>) -> Result<(), DraftError> {
        if proposed.len() > MAX_GENRES {
            return Err(DraftError::TooManyGenres { max: MAX_GENRES });
        }
        self.genres = proposed;
        Ok(())
    }

    /// Append one genre to the selection, enforcing the selection limit
    pub fn add_genre(&mut self, genre: String) -> Result<(), DraftError> {
        if self.genres.contains(&genre) {
            return Ok(());
        }
        let mut proposed = self.genres.clone();
        proposed.push(genre);
        self.set_genres(proposed)
    }

    pub fn remove_genre(&mut self, genre: &str) {
        self.genres.retain(|g| g != genre);
    }

    /// Append one actor, keeping insertion order and rejecting duplicates
    pub fn add_actor(&mut self, name: String) -> Result<(), DraftError> {
        if self.actors.contains(&name) {
            return Err(DraftError::DuplicateActor(name));
        }
        self.actors.push(name);
        Ok(())
    }

    pub fn remove_actor(&mut self, name: &str) {
        self.actors.retain(|a| a != name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_genres_within_limit() {
        let mut draft = MovieDraft::default();
        assert!(draft
            .set_genres(vec!["Drama".into(), "Horror".into(), "War".into()])
            .is_ok());
        assert_eq!(draft.genres, vec!["Drama", "Horror", "War"]);
    }

    #[test]
    fn test_fourth_genre_rejected_and_selection_unchanged() {
        let mut draft = MovieDraft::default();
        draft
            .set_genres(vec!["Drama".into(), "Horror".into(), "War".into()])
            .unwrap();

        let err = draft.add_genre("Comedy".into()).unwrap_err();
        assert_eq!(err, DraftError::TooManyGenres { max: 3 });
        assert_eq!(draft.genres, vec!["Drama", "Horror", "War"]);
    }

    #[test]
    fn test_add_genre_is_idempotent() {
        let mut draft = MovieDraft::default();
        draft.add_genre("Drama".into()).unwrap();
        draft.add_genre("Drama".into()).unwrap();
        assert_eq!(draft.genres, vec!["Drama"]);
    }

    #[test]
    fn test_remove_genre() {
        let mut draft = MovieDraft::default();
        draft.set_genres(vec!["Drama".into(), "Horror".into()]).unwrap();
        draft.remove_genre("Drama");
        assert_eq!(draft.genres, vec!["Horror"]);
    }

    #[test]
    fn test_actors_keep_order_and_reject_duplicates() {
        let mut draft = MovieDraft::default();
        draft.add_actor("Ana de Armas".into()).unwrap();
        draft.add_actor("Oscar Isaac".into()).unwrap();

        let err = draft.add_actor("Ana de Armas".into()).unwrap_err();
        assert_eq!(err, DraftError::DuplicateActor("Ana de Armas".into()));
        assert_eq!(draft.actors, vec!["Ana de Armas", "Oscar Isaac"]);
    }

    #[test]
    fn test_genre_limit_message() {
        let err = DraftError::TooManyGenres { max: 3 };
        assert_eq!(err.to_string(), "You can select a maximum of 3 genres.");
    }
}
