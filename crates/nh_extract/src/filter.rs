/// Minimum length for a candidate to be worth showing.
const MIN_LEN: usize = 100;
/// Accepted descriptions are clipped to this many characters.
const MAX_LEN: usize = 500;

/// Substrings that mark a candidate as page furniture rather than article
/// text.
const BOILERPLATE_MARKERS: [&str; 5] = [
    "published",
    "community article",
    "how your",
    "advertisement",
    "cookie policy",
];

/// Whether `candidate` is an acceptable description for an article titled
/// `title`. Rejects short strings, boilerplate, and headline echoes
/// (candidate and title containing each other, case-insensitive).
pub fn is_acceptable(candidate: &str, title: &str) -> bool {
    if candidate.chars().count() < MIN_LEN {
        return false;
    }

    let lower = candidate.to_lowercase();
    if BOILERPLATE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
    {
        return false;
    }

    let title_lower = title.to_lowercase();
    if lower.contains(&title_lower) || title_lower.contains(&lower) {
        return false;
    }

    true
}

/// Clip to `MAX_LEN` characters with a trailing ellipsis marker.
pub fn truncate(description: &str) -> String {
    if description.chars().count() > MAX_LEN {
        let mut clipped: String = description.chars().take(MAX_LEN).collect();
        clipped.push_str("...");
        clipped
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_text(prefix: &str) -> String {
        format!("{}{}", prefix, "x".repeat(150))
    }

    #[test]
    fn test_rejects_short_candidates() {
        assert!(!is_acceptable("short text", "x"));
    }

    #[test]
    fn test_rejects_boilerplate_even_when_long() {
        assert!(!is_acceptable(&long_text("...advertisement... "), "y"));
        assert!(!is_acceptable(&long_text("see our cookie policy "), "y"));
        assert!(!is_acceptable(&long_text("Published 3 hours ago. "), "y"));
    }

    #[test]
    fn test_rejects_title_echo() {
        let title = long_text("A headline repeated verbatim ");
        assert!(!is_acceptable(&title, &title));
    }

    #[test]
    fn test_rejects_candidate_containing_title() {
        let title = "Quarterly results beat expectations";
        let candidate = long_text(&format!("{} and the market reacted ", title));
        assert!(!is_acceptable(&candidate, title));
    }

    #[test]
    fn test_accepts_clean_text() {
        let candidate = long_text("The research team demonstrated a new approach to protein folding ");
        assert!(is_acceptable(&candidate, "Some unrelated headline"));
    }

    #[test]
    fn test_truncate_law() {
        let long = "a".repeat(900);
        let clipped = truncate(&long);
        assert_eq!(clipped.chars().count(), MAX_LEN + 3);
        assert!(clipped.ends_with("..."));

        let short = "a".repeat(120);
        assert_eq!(truncate(&short), short);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let long = "é".repeat(600);
        let clipped = truncate(&long);
        assert_eq!(clipped.chars().count(), MAX_LEN + 3);
    }
}
