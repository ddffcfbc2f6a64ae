use serde::{Deserialize, Serialize};

use super::draft::MovieDraft;

/// Part name for the optional poster file, appended by the frontend only
/// when an image was staged. Never present among the text parts.
pub const POSTER_PART: &str = "poster";

/// Response body of the add-movie endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMovieResponse {
    pub message: String,
}

impl MovieDraft {
    /// Render the draft as the ordered text parts of the multipart payload
    ///
    /// `actors` and `genre` are JSON-encoded string arrays; everything
    /// else is plain text. An unset platform renders as the empty string.
    pub fn to_parts(&self) -> Result<Vec<(String, String)>, serde_json::Error> {
        let platform = self.platform.map(|p| p.as_str()).unwrap_or_default();
        Ok(vec![
            ("movieName".to_string(), self.movie_name.clone()),
            ("releaseDate".to_string(), self.release_date.clone()),
            ("budget".to_string(), self.budget.clone()),
            ("storyline".to_string(), self.storyline.clone()),
            ("actors".to_string(), serde_json::to_string(&self.actors)?),
            ("rating".to_string(), format!("{}", self.rating)),
            ("platform".to_string(), platform.to_string()),
            ("trailerLink".to_string(), self.trailer_link.clone()),
            ("platformLink".to_string(), self.platform_link.clone()),
            ("genre".to_string(), serde_json::to_string(&self.genres)?),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Platform;

    fn part<'a>(parts: &'a [(String, String)], name: &str) -> &'a str {
        &parts
            .iter()
            .find(|(n, _)| n == name)
            .unwrap_or_else(|| panic!("missing part {}", name))
            .1
    }

    #[test]
    fn test_part_names_and_order() {
        let parts = MovieDraft::default().to_parts().unwrap();
        let names: Vec<&str> = parts.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "movieName",
                "releaseDate",
                "budget",
                "storyline",
                "actors",
                "rating",
                "platform",
                "trailerLink",
                "platformLink",
                "genre",
            ]
        );
    }

    #[test]
    fn test_genres_json_encoded() {
        let mut draft = MovieDraft::default();
        draft.set_genres(vec!["Drama".into(), "Horror".into()]).unwrap();
        let parts = draft.to_parts().unwrap();
        assert_eq!(part(&parts, "genre"), r#"["Drama","Horror"]"#);
    }

    #[test]
    fn test_actors_json_encoded() {
        let mut draft = MovieDraft::default();
        draft.add_actor("A".into()).unwrap();
        draft.add_actor("B".into()).unwrap();
        let parts = draft.to_parts().unwrap();
        assert_eq!(part(&parts, "actors"), r#"["A","B"]"#);
    }

    #[test]
    fn test_empty_draft_renders_empty_strings() {
        let parts = MovieDraft::default().to_parts().unwrap();
        assert_eq!(part(&parts, "movieName"), "");
        assert_eq!(part(&parts, "platform"), "");
        assert_eq!(part(&parts, "rating"), "0");
        assert_eq!(part(&parts, "actors"), "[]");
        assert_eq!(part(&parts, "genre"), "[]");
    }

    #[test]
    fn test_scalar_fields_rendered() {
        let draft = MovieDraft {
            movie_name: "Dune".into(),
            release_date: "2021-10-22".into(),
            budget: "165000000".into(),
            rating: 4.5,
            platform: Some(Platform::AmazonPrime),
            trailer_link: "https://youtu.be/n9xhJrPXop4".into(),
            ..MovieDraft::default()
        };
        let parts = draft.to_parts().unwrap();
        assert_eq!(part(&parts, "movieName"), "Dune");
        assert_eq!(part(&parts, "rating"), "4.5");
        assert_eq!(part(&parts, "platform"), "Amazon Prime");
        assert_eq!(part(&parts, "trailerLink"), "https://youtu.be/n9xhJrPXop4");
    }

    #[test]
    fn test_poster_never_a_text_part() {
        let parts = MovieDraft::default().to_parts().unwrap();
        assert!(parts.iter().all(|(n, _)| n != POSTER_PART));
    }
}
