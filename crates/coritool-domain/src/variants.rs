//! Name-variant generation
//!
//! Registries and news sources order personal names inconsistently
//! ("Smith John", "Ivanenko Ivan Petrovych"), so each entity is searched under
//! a few token-order permutations.

use std::collections::BTreeSet;

/// Generate the token-order variants of a name
///
/// Rules, applied to the whitespace-separated tokens:
/// - ASCII-only names: 2 tokens add the reversal, 3 tokens add the rotation
///   `(t2, t0, t1)` (western "Last First Middle" ordering)
/// - Any script: 2 tokens add the reversal, 3 tokens add the swap
///   `(t1, t0, t2)` (Slavic "Surname Name Patronymic" ordering)
/// - Any other token count yields only the original
///
/// The original string is always included verbatim, so the result is never
/// empty. The set is ordered, which keeps iteration deterministic.
///
/// # Examples
///
/// ```
/// use coritool_domain::generate_name_variants;
///
/// let variants = generate_name_variants("John Smith");
/// assert!(variants.contains("John Smith"));
/// assert!(variants.contains("Smith John"));
/// assert_eq!(variants.len(), 2);
/// ```
pub fn generate_name_variants(name: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    variants.insert(name.to_string());

    let parts: Vec<&str> = name.split_whitespace().collect();

    if name.is_ascii() {
        match parts.as_slice() {
            [first, last] => {
                variants.insert(format!("{} {}", last, first));
            }
            [first, middle, last] => {
                variants.insert(format!("{} {} {}", last, first, middle));
            }
            _ => {}
        }
    }

    match parts.as_slice() {
        [first, last] => {
            variants.insert(format!("{} {}", last, first));
        }
        [first, middle, last] => {
            variants.insert(format!("{} {} {}", middle, first, last));
        }
        _ => {}
    }

    variants
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn ascii_token() -> impl Strategy<Value = String> {
        "[A-Za-z]{1,10}"
    }

    fn any_token() -> impl Strategy<Value = String> {
        prop_oneof!["[A-Za-z]{1,10}", "[а-яіїє]{1,10}"]
    }

    proptest! {
        /// Property: two-token names yield exactly the original and its reversal
        #[test]
        fn test_two_token_names(a in any_token(), b in any_token()) {
            let name = format!("{} {}", a, b);
            let expected: BTreeSet<String> =
                [name.clone(), format!("{} {}", b, a)].into_iter().collect();
            prop_assert_eq!(generate_name_variants(&name), expected);
        }

        /// Property: three-token ASCII names yield original, rotation, and swap
        #[test]
        fn test_three_token_ascii_names(
            a in ascii_token(),
            b in ascii_token(),
            c in ascii_token(),
        ) {
            let name = format!("{} {} {}", a, b, c);
            let variants = generate_name_variants(&name);
            prop_assert!(variants.contains(&name));
            let cab = format!("{} {} {}", c, a, b);
            let bac = format!("{} {} {}", b, a, c);
            prop_assert!(variants.contains(&cab));
            prop_assert!(variants.contains(&bac));
            prop_assert!(variants.len() <= 3);
        }

        /// Property: other token counts yield only the original
        #[test]
        fn test_other_token_counts(tokens in prop::collection::vec(any_token(), 4..8)) {
            let name = tokens.join(" ");
            let variants = generate_name_variants(&name);
            prop_assert_eq!(variants.len(), 1);
            prop_assert!(variants.contains(&name));
        }

        /// Property: the original is always present
        #[test]
        fn test_never_empty(name in ".{0,40}") {
            prop_assert!(generate_name_variants(&name).contains(&name));
        }
    }
}
