//! Artist records, read-only projection of the backend artist registry

use serde::{Deserialize, Serialize};

/// One artist as returned by the get-artist endpoint
///
/// The backend record carries more fields; only the display name is
/// retained client-side, unknown fields are ignored on deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub name: String,
}

/// Project fetched records to the display-name list used by the cast picker
pub fn actor_names(records: &[ArtistRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_from_records() {
        let records: Vec<ArtistRecord> =
            serde_json::from_str(r#"[{"name":"A"},{"name":"B"}]"#).unwrap();
        assert_eq!(actor_names(&records), vec!["A", "B"]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let records: Vec<ArtistRecord> =
            serde_json::from_str(r#"[{"name":"A","dob":"1990-01-01","movies":[]}]"#).unwrap();
        assert_eq!(actor_names(&records), vec!["A"]);
    }

    #[test]
    fn test_empty_list() {
        let records: Vec<ArtistRecord> = serde_json::from_str("[]").unwrap();
        assert!(actor_names(&records).is_empty());
    }
}
