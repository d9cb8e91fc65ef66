use std::sync::LazyLock;

use alamat_core::Location;
use regex::Regex;

/// Unit/floor designator in a Singapore address, e.g. "#12-34"
static UNIT_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\d+-\w+").unwrap());

/// Whole-word "blk", any case
static BLK_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bblk\b").unwrap());

/// Free-text search string for a location
///
/// OneMap returns no results when the query carries a unit designator or
/// the "blk" abbreviation, so both are stripped before the call.
pub fn search_query(location: &Location) -> String {
    let query = format!(
        "{} {} Singapore {}",
        location.street1,
        location.street2.as_deref().unwrap_or(""),
        location.postal_code
    );

    let query = UNIT_NUMBER.replace_all(&query, "");
    let query = BLK_WORD.replace_all(&query, "");

    query.into_owned()
}

/// The unit designator in the original address text, if there is exactly one
///
/// Several designators are ambiguous; none is returned then.
pub fn single_unit_designator(location: &Location) -> Option<String> {
    let joined = format!(
        "{} {}",
        location.street1,
        location.street2.as_deref().unwrap_or("")
    );

    let mut matches = UNIT_NUMBER.find_iter(&joined);
    match (matches.next(), matches.next()) {
        (Some(m), None) => Some(m.as_str().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(street1: &str, street2: Option<&str>, postal: &str) -> Location {
        Location {
            country: "SG".to_string(),
            postal_code: postal.to_string(),
            street1: street1.to_string(),
            street2: street2.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_search_query_format() {
        let query = search_query(&location("10 Anson Rd", Some("Tower 2"), "079903"));
        assert_eq!(query, "10 Anson Rd Tower 2 Singapore 079903");
    }

    #[test]
    fn test_search_query_without_street2() {
        let query = search_query(&location("10 Anson Rd", None, "079903"));
        assert_eq!(query, "10 Anson Rd  Singapore 079903");
    }

    #[test]
    fn test_search_query_strips_unit_designator() {
        let query = search_query(&location("123 Example Ave", Some("#12-34"), "560123"));
        assert!(!UNIT_NUMBER.is_match(&query));
        assert!(query.contains("123 Example Ave"));
        assert!(query.contains("Singapore 560123"));
    }

    #[test]
    fn test_search_query_strips_blk_any_case() {
        for street1 in ["Blk 123 Example Ave", "BLK 123 Example Ave", "blk 123 Example Ave"] {
            let query = search_query(&location(street1, None, "560123"));
            assert!(!BLK_WORD.is_match(&query), "blk survived in: {query}");
            assert!(query.contains("123 Example Ave"));
        }
    }

    #[test]
    fn test_embedded_blk_survives() {
        let query = search_query(&location("5 Blkland Road", None, "560123"));
        assert!(query.contains("Blkland"));
    }

    #[test]
    fn test_single_unit_designator_found() {
        let loc = location("123 Example Ave", Some("#05-10"), "560123");
        assert_eq!(single_unit_designator(&loc), Some("#05-10".to_string()));
    }

    #[test]
    fn test_single_unit_designator_absent() {
        let loc = location("123 Example Ave", Some("Tower 2"), "560123");
        assert_eq!(single_unit_designator(&loc), None);
    }

    #[test]
    fn test_two_unit_designators_are_ambiguous() {
        let loc = location("#01-11 Example Ave", Some("#05-10"), "560123");
        assert_eq!(single_unit_designator(&loc), None);
    }

    #[test]
    fn test_unit_designator_spans_both_street_lines() {
        let loc = location("123 Example Ave #07-08", None, "560123");
        assert_eq!(single_unit_designator(&loc), Some("#07-08".to_string()));
    }
}
