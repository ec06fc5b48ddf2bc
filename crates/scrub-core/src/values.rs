//! Value-level cleaning helpers used by the normalization stages.

use std::cmp::Ordering;

/// Minimal email shape check: one `@` with at least one character before it,
/// and a domain with at least one character on each side of its last dot.
///
/// Intentionally permissive. Stricter validation (TLD lists, character
/// classes) would change which addresses survive cleaning.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Map a known country alias to its canonical name.
///
/// The alias table is consulted case-insensitively; unknown values are left
/// to the caller to pass through unchanged.
pub fn canonical_country(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().as_str() {
        "usa" => Some("United States"),
        "uk" => Some("United Kingdom"),
        _ => None,
    }
}

/// Strip every character that is not a digit, `.` or `-`.
///
/// Turns currency-formatted values like `"$1,200.50"` into parseable text.
pub fn sanitize_income(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect()
}

/// First letter uppercase, everything else lowercase.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Median of the supplied values: the middle element for odd counts, the
/// mean of the two middle elements for even counts. None when empty.
pub fn median(values: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sorted: Vec<f64> = values.collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice@.com"));
        assert!(!is_valid_email("alice@example."));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn stays_permissive() {
        // No TLD checking, no character class restrictions.
        assert!(is_valid_email("alice smith@exa mple.xyz123"));
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn country_aliases_are_case_insensitive() {
        assert_eq!(canonical_country("usa"), Some("United States"));
        assert_eq!(canonical_country("USA"), Some("United States"));
        assert_eq!(canonical_country("Usa"), Some("United States"));
        assert_eq!(canonical_country("uk"), Some("United Kingdom"));
        assert_eq!(canonical_country("UK"), Some("United Kingdom"));
        assert_eq!(canonical_country("Canada"), None);
        assert_eq!(canonical_country("United States"), None);
    }

    #[test]
    fn income_sanitization_keeps_sign_and_decimal() {
        assert_eq!(sanitize_income("$1,200.50"), "1200.50");
        assert_eq!(sanitize_income("-300"), "-300");
        assert_eq!(sanitize_income("abc"), "");
        assert_eq!(sanitize_income("USD 50 000"), "50000");
    }

    #[test]
    fn capitalize_handles_edge_cases() {
        assert_eq!(capitalize("active"), "Active");
        assert_eq!(capitalize("INACTIVE"), "Inactive");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn median_odd_and_even() {
        assert_eq!(median([25.0, 35.0].into_iter()), Some(30.0));
        assert_eq!(median([25.0, 30.0, 35.0].into_iter()), Some(30.0));
        assert_eq!(median([1.0].into_iter()), Some(1.0));
        assert_eq!(median(std::iter::empty()), None);
    }
}
