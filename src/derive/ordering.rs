//! Experience ordering by extracted start year.
//!
//! The sort key is a heuristic over the free-text duration, not a calendar
//! parse: split on the " - " range separator, take the first segment, then
//! prefer its second whitespace token ("Jan 2022" -> "2022") falling back
//! to the first ("2019 - 2021" -> "2019"). The year is the token's leading
//! decimal digits; anything unparseable keys as 0 and therefore sorts
//! last. Single-token durations with no range separator deliberately keep
//! the first-token fallback rather than any stricter parse.

use crate::content::ExperienceItem;

// =============================================================================
// Year Extraction
// =============================================================================

/// Extract the start year from a duration string. Total: unparseable
/// inputs yield 0.
pub fn start_year(duration: &str) -> u32 {
    let first_segment = duration.split(" - ").next().unwrap_or(duration);
    let mut tokens = first_segment.split_whitespace();
    let first = tokens.next().unwrap_or("");
    let year_token = tokens.next().unwrap_or(first);
    leading_digits(year_token)
}

/// Parse the leading decimal digits of a token ("2022," -> 2022,
/// "Jan" -> 0).
fn leading_digits(token: &str) -> u32 {
    let digits: &str = token
        .split_once(|c: char| !c.is_ascii_digit())
        .map(|(head, _)| head)
        .unwrap_or(token);
    digits.parse().unwrap_or(0)
}

// =============================================================================
// Sort
// =============================================================================

/// Return a copy of the experience list sorted most-recent-first.
///
/// The sort is stable: items with equal extracted years (including all
/// year-0 unparseables) keep their original relative order.
pub fn sorted_by_recency(items: &[ExperienceItem]) -> Vec<ExperienceItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| start_year(&b.duration).cmp(&start_year(&a.duration)));
    sorted
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(duration: &str) -> ExperienceItem {
        ExperienceItem {
            role: "Engineer".into(),
            company: "Acme".into(),
            duration: duration.into(),
            description: String::new(),
            key_achievements: None,
            technologies: None,
        }
    }

    #[test]
    fn test_year_from_month_year_range() {
        assert_eq!(start_year("Jan 2022 - Present"), 2022);
        assert_eq!(start_year("Mar 2018 - Dec 2019"), 2018);
    }

    #[test]
    fn test_year_from_bare_year_range() {
        assert_eq!(start_year("2019 - 2021"), 2019);
    }

    #[test]
    fn test_year_from_single_token() {
        // No range separator: first whitespace token fallback.
        assert_eq!(start_year("2023"), 2023);
        assert_eq!(start_year("garbage"), 0);
    }

    #[test]
    fn test_year_with_trailing_punctuation() {
        assert_eq!(start_year("Jan 2022, ongoing"), 2022);
    }

    #[test]
    fn test_unparseable_defaults_to_zero() {
        assert_eq!(start_year(""), 0);
        assert_eq!(start_year("Summer - Winter"), 0);
    }

    #[test]
    fn test_sort_descending_with_garbage_last() {
        let items = vec![item("2019 - 2021"), item("garbage"), item("Jan 2022 - Present")];
        let sorted = sorted_by_recency(&items);
        let durations: Vec<&str> = sorted.iter().map(|i| i.duration.as_str()).collect();
        assert_eq!(durations, ["Jan 2022 - Present", "2019 - 2021", "garbage"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut tied = item("2020 - 2021");
        tied.role = "First".into();
        let mut tied2 = item("Feb 2020 - Dec 2020");
        tied2.role = "Second".into();
        let mut junk1 = item("???");
        junk1.role = "JunkA".into();
        let mut junk2 = item("");
        junk2.role = "JunkB".into();

        let sorted = sorted_by_recency(&[tied, tied2, junk1, junk2]);
        let roles: Vec<&str> = sorted.iter().map(|i| i.role.as_str()).collect();
        assert_eq!(roles, ["First", "Second", "JunkA", "JunkB"]);
    }

    #[test]
    fn test_input_slice_is_untouched() {
        let items = vec![item("2019 - 2021"), item("2022 - Present")];
        let _ = sorted_by_recency(&items);
        assert_eq!(items[0].duration, "2019 - 2021");
    }
}
