//! Locale-aware string comparison for name sorting.
//!
//! Names compare in three levels, the way a collator for the root locale does:
//!
//! 1. **Base letters**: decomposed (NFD), accents dropped, case folded, so
//!    "Élise" sits between "Elias" and "Eva" rather than after "Zoe"
//! 2. **Accents**: an unaccented letter before its accented forms
//! 3. **Case**: lowercase before uppercase
//!
//! A later level only decides when every earlier one ties.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compares two strings the way a human-facing sorted list expects.
///
/// # Example
///
/// ```rust
/// use rosterview::roster::locale_compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_compare("bo chan", "Amy Lee"), Ordering::Greater);
/// assert_eq!(locale_compare("amy", "Amy"), Ordering::Less);
/// assert_eq!(locale_compare("Élise", "Eva"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let (base_a, marks_a) = decompose(a);
    let (base_b, marks_b) = decompose(b);

    let folded_a = base_a.chars().flat_map(char::to_lowercase);
    let folded_b = base_b.chars().flat_map(char::to_lowercase);

    folded_a
        .cmp(folded_b)
        .then_with(|| marks_a.cmp(&marks_b))
        .then_with(|| case_order(&base_a, &base_b))
}

/// Splits `s` into its base letters and, per base letter, the combining marks
/// that followed it. An empty mark list orders before any non-empty one.
fn decompose(s: &str) -> (String, Vec<Vec<char>>) {
    let mut base = String::with_capacity(s.len());
    let mut marks: Vec<Vec<char>> = Vec::new();

    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = marks.last_mut() {
                last.push(c);
                continue;
            }
        }
        base.push(c);
        marks.push(Vec::new());
    }
    (base, marks)
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.chars().count().cmp(&b.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| locale_compare(a, b));
        names
    }

    #[test]
    fn test_case_does_not_dominate() {
        assert_eq!(
            sorted(vec!["bob", "Alice", "alan", "Bea"]),
            vec!["alan", "Alice", "Bea", "bob"]
        );
    }

    #[test]
    fn test_case_breaks_ties() {
        assert_eq!(locale_compare("amy lee", "Amy Lee"), Ordering::Less);
        assert_eq!(locale_compare("Amy Lee", "Amy Lee"), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("Amy", "Amy Lee"), Ordering::Less);
    }

    #[test]
    fn test_accented_letters_sort_with_their_base_letter() {
        assert_eq!(
            sorted(vec!["Zoe Adams", "Élise Moreau", "Eva Fox"]),
            vec!["Élise Moreau", "Eva Fox", "Zoe Adams"]
        );
        assert_eq!(locale_compare("Carla Núñez", "Carla Owens"), Ordering::Less);
    }

    #[test]
    fn test_accents_outrank_case() {
        assert_eq!(
            sorted(vec!["Ána", "ána", "Ana", "ana"]),
            vec!["ana", "Ana", "ána", "Ána"]
        );
        assert_eq!(locale_compare("Nunez", "Núñez"), Ordering::Less);
    }

    #[test]
    fn test_composed_and_decomposed_forms_are_equal() {
        assert_eq!(locale_compare("Zo\u{e9}", "Zoe\u{301}"), Ordering::Equal);
    }
}
