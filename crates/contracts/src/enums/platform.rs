use serde::{Deserialize, Serialize};

/// Streaming platforms the catalog supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Netflix,
    Hulu,
    AmazonPrime,
    DisneyPlus,
}

impl Platform {
    /// Display name, also the value sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Netflix => "Netflix",
            Platform::Hulu => "Hulu",
            Platform::AmazonPrime => "Amazon Prime",
            Platform::DisneyPlus => "Disney+",
        }
    }

    /// All platforms, in menu order
    pub fn all() -> Vec<Platform> {
        vec![
            Platform::Netflix,
            Platform::Hulu,
            Platform::AmazonPrime,
            Platform::DisneyPlus,
        ]
    }

    /// Parse from the display name
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Netflix" => Some(Platform::Netflix),
            "Hulu" => Some(Platform::Hulu),
            "Amazon Prime" => Some(Platform::AmazonPrime),
            "Disney+" => Some(Platform::DisneyPlus),
            _ => None,
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Platform::Netflix.as_str(), "Netflix");
        assert_eq!(Platform::AmazonPrime.as_str(), "Amazon Prime");
        assert_eq!(Platform::DisneyPlus.as_str(), "Disney+");
    }

    #[test]
    fn test_roundtrip_from_str() {
        for platform in Platform::all() {
            assert_eq!(Platform::from_str(platform.as_str()), Some(platform));
        }
        assert_eq!(Platform::from_str("HBO"), None);
    }

    #[test]
    fn test_all_has_four_entries() {
        assert_eq!(Platform::all().len(), 4);
    }
}
