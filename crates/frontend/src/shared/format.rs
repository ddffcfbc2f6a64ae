/// Utilities for presenting values in the form UI

/// Format a byte count for display next to a staged file name
/// Example: 2_621_440 -> "2.5 MB"
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;

    let bytes = bytes as f64;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", bytes as u64)
    }
}

/// Label for the rating slider, e.g. "2.5 / 5"
pub fn format_rating(rating: f32) -> String {
    format!("{} / 5", rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(2_621_440), "2.5 MB");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(0.0), "0 / 5");
        assert_eq!(format_rating(2.5), "2.5 / 5");
        assert_eq!(format_rating(5.0), "5 / 5");
    }
}
