/// Fixed genre catalog offered by the entry form
pub const GENRES: [&str; 20] = [
    "Action",
    "Comedy",
    "Drama",
    "Horror",
    "Romance",
    "Sci-Fi",
    "Thriller",
    "Animation",
    "Documentary",
    "Adventure",
    "Fantasy",
    "Mystery",
    "Crime",
    "Historical",
    "Biography",
    "Family",
    "Musical",
    "War",
    "Western",
    "superhero",
];

/// Maximum number of genres a single movie entry may carry
pub const MAX_GENRES: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(GENRES.len(), 20);
    }

    #[test]
    fn test_catalog_contents() {
        assert!(GENRES.contains(&"Drama"));
        assert!(GENRES.contains(&"superhero"));
        assert!(!GENRES.contains(&"Superhero"));
    }

    #[test]
    fn test_limit() {
        assert_eq!(MAX_GENRES, 3);
    }
}
