//! Company-name canonicalization.
//!
//! Raw display names on job boards are noisy: legal-entity suffixes
//! ("B.V.", "N.V."), generic filler words ("Holding", "International"),
//! punctuation, and inconsistent casing. [`canonicalize`] reduces a display
//! name to a comparison key so the matcher can compare names that refer to
//! the same organization. The key is never shown to a user.

/// Noise tokens removed from names before comparison, applied in order.
///
/// Legal-entity suffixes first, then generic filler words. Tokens are
/// matched as plain substrings against the lowercased input.
const NOISE_TOKENS: [&str; 11] = [
    "b.v.",
    "n.v.",
    "inc.",
    "corp.",
    "corporation",
    "ltd.",
    "holding",
    "netherlands",
    "trading",
    "group",
    "international",
];

/// Punctuation stripped after token removal.
const PUNCTUATION: [char; 21] = [
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Reduce a raw company display name to a normalized comparison key.
///
/// The steps run in a fixed order; later steps assume earlier ones ran:
/// 1. lowercase,
/// 2. remove [`NOISE_TOKENS`] wherever they occur as substrings,
/// 3. strip punctuation,
/// 4. collapse whitespace runs and trim.
///
/// Empty input yields an empty key, never an error.
pub fn canonicalize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let mut cleaned = name.to_lowercase();
    for token in NOISE_TOKENS {
        if cleaned.contains(token) {
            cleaned = cleaned.replace(token, "");
        }
    }
    cleaned.retain(|c| !PUNCTUATION.contains(&c));

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_legal_suffixes_and_filler() {
        assert_eq!(canonicalize("ASML Holding N.V."), "asml");
        assert_eq!(canonicalize("Shell International B.V."), "shell");
        assert_eq!(canonicalize("Booking.com B.V."), "bookingcom");
        assert_eq!(canonicalize("Tata Consultancy Services Netherlands B.V."), "tata consultancy services");
    }

    #[test]
    fn empty_input_yields_empty_key() {
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn suffix_only_input_collapses_to_empty() {
        assert_eq!(canonicalize("Holding B.V."), "");
    }

    #[test]
    fn collapses_interior_whitespace() {
        assert_eq!(canonicalize("  ABN   AMRO  Bank  "), "abn amro bank");
    }

    #[test]
    fn idempotent_on_registry_style_names() {
        for name in [
            "ASML Holding N.V.",
            "Philips Medical Systems Nederland B.V.",
            "PricewaterhouseCoopers",
            "Uber B.V.",
            "KLM Royal Dutch Airlines",
            "Ahold Delhaize GSO B.V.",
        ] {
            let once = canonicalize(name);
            assert_eq!(canonicalize(&once), once, "not idempotent for {name:?}");
        }
    }

    proptest! {
        // ASCII-only: the case-fold round trip is only an identity for ASCII.
        #[test]
        fn case_insensitive(s in "[ -~]{0,60}") {
            prop_assert_eq!(canonicalize(&s.to_uppercase()), canonicalize(&s));
        }

        #[test]
        fn idempotent_on_plausible_names(
            words in proptest::collection::vec("[A-Za-z]{1,10}", 0..5),
            suffix in prop_oneof![
                Just(""), Just(" B.V."), Just(" N.V."), Just(" Inc."),
                Just(" Ltd."), Just(" Corporation"), Just(" Group"),
            ],
        ) {
            let name = format!("{}{}", words.join(" "), suffix);
            let once = canonicalize(&name);
            prop_assert_eq!(canonicalize(&once), once.clone());
        }

        #[test]
        fn output_has_no_stripped_punctuation(s in "[ -~]{0,60}") {
            let key = canonicalize(&s);
            prop_assert!(!key.chars().any(|c| PUNCTUATION.contains(&c)));
            prop_assert!(!key.contains("  "));
            prop_assert_eq!(key.trim(), key.as_str());
        }
    }
}
