//! Property-based tests for format alias resolution.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::formats::{self, ALIASES};
    use proptest::prelude::*;

    fn known_alias() -> impl Strategy<Value = &'static str> {
        proptest::sample::select(ALIASES.iter().map(|(alias, _)| *alias).collect::<Vec<_>>())
    }

    proptest! {
        /// Property: resolution ignores letter case for every known alias
        #[test]
        fn resolve_is_case_insensitive(alias in known_alias(), mask in proptest::collection::vec(any::<bool>(), 0..16)) {
            let mixed: String = alias
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if mask.get(i).copied().unwrap_or(false) {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect();
            prop_assert_eq!(
                formats::resolve(&mixed).unwrap(),
                formats::resolve(alias).unwrap(),
                "case variant '{}' resolved differently",
                mixed
            );
        }

        /// Property: surrounding whitespace never changes resolution
        #[test]
        fn resolve_ignores_padding(alias in known_alias(), left in 0usize..4, right in 0usize..4) {
            let padded = format!("{}{}{}", " ".repeat(left), alias, " ".repeat(right));
            prop_assert_eq!(
                formats::resolve(&padded).unwrap(),
                formats::resolve(alias).unwrap()
            );
        }

        /// Property: resolution is deterministic (same input = same output)
        #[test]
        fn resolve_is_deterministic(alias in "[a-zA-Z0-9]{1,12}") {
            let first = formats::resolve(&alias).map(|f| f.as_str());
            let second = formats::resolve(&alias).map(|f| f.as_str());
            prop_assert_eq!(first.is_ok(), second.is_ok());
            if let (Ok(a), Ok(b)) = (first, second) {
                prop_assert_eq!(a, b);
            }
        }

        /// Property: unknown aliases always fail with a row-scoped error
        #[test]
        fn unknown_aliases_are_row_scoped_errors(alias in "[a-z]{1,12}") {
            prop_assume!(!ALIASES.iter().any(|(known, _)| *known == alias));
            let error = formats::resolve(&alias).unwrap_err();
            prop_assert!(error.is_row_scoped());
        }
    }
}
