//! Sponsor matching: raw company name in, sponsor verdict out.
//!
//! The matcher walks the registry in order and returns on the first entry
//! that matches, trying three layers per entry:
//!
//! 1. raw variant match (case-insensitive equality or substring) — runs
//!    before canonicalization so exact legal names are caught before lossy
//!    cleaning,
//! 2. canonicalized key match (equality or mutual containment),
//! 3. canonicalized variant match (equality or mutual containment).
//!
//! The containment checks deliberately favor false positives over false
//! negatives: a short key like `"ing"` matches any cleaned name containing
//! it. That trade-off is product-visible; do not tighten it here without
//! revisiting classification outcomes.

use std::sync::Arc;

use crate::canonical::canonicalize;
use crate::registry::SponsorRegistry;

/// Classifies raw company names against an immutable sponsor registry.
#[derive(Debug, Clone)]
pub struct SponsorMatcher {
    registry: Arc<SponsorRegistry>,
}

impl SponsorMatcher {
    /// Create a matcher over the given registry snapshot.
    pub fn new(registry: Arc<SponsorRegistry>) -> Self {
        Self { registry }
    }

    /// Create a matcher over the built-in registry snapshot.
    pub fn builtin() -> Self {
        Self::new(Arc::new(SponsorRegistry::builtin().clone()))
    }

    /// The registry this matcher consults.
    pub fn registry(&self) -> &SponsorRegistry {
        &self.registry
    }

    /// Decide whether a raw company display name belongs to a recognized
    /// sponsor. Pure function of the input and the registry; the tracing
    /// calls are diagnostic only.
    pub fn is_sponsor(&self, raw_name: &str) -> bool {
        if raw_name.is_empty() {
            return false;
        }

        let raw_lower = raw_name.trim().to_lowercase();
        let clean_name = canonicalize(raw_name);
        tracing::trace!(raw = raw_name, clean = %clean_name, "Checking company");

        for entry in self.registry.entries() {
            // Layer 1: raw variants, before any cleaning.
            if entry.variants.iter().any(|variant| {
                let variant_lower = variant.to_lowercase();
                variant_lower == raw_lower || raw_lower.contains(&variant_lower)
            }) {
                tracing::debug!(
                    raw = raw_name,
                    key = %entry.canonical_key,
                    layer = "raw_variant",
                    "Sponsor match"
                );
                return true;
            }

            // Layer 2: canonicalized keys, mutual containment.
            let clean_key = canonicalize(&entry.canonical_key);
            if clean_name == clean_key
                || clean_name.contains(&clean_key)
                || clean_key.contains(&clean_name)
            {
                tracing::debug!(
                    raw = raw_name,
                    key = %entry.canonical_key,
                    layer = "canonical_key",
                    "Sponsor match"
                );
                return true;
            }

            // Layer 3: canonicalized variants, mutual containment.
            if entry.variants.iter().any(|variant| {
                let clean_variant = canonicalize(variant);
                clean_name == clean_variant
                    || clean_name.contains(&clean_variant)
                    || clean_variant.contains(&clean_name)
            }) {
                tracing::debug!(
                    raw = raw_name,
                    key = %entry.canonical_key,
                    layer = "canonical_variant",
                    "Sponsor match"
                );
                return true;
            }
        }

        tracing::trace!(raw = raw_name, "No sponsor match");
        false
    }
}

impl Default for SponsorMatcher {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SponsorEntry;

    fn matcher() -> SponsorMatcher {
        SponsorMatcher::builtin()
    }

    #[test]
    fn empty_name_is_never_a_sponsor() {
        assert!(!matcher().is_sponsor(""));
    }

    #[test]
    fn every_registered_variant_matches() {
        let m = matcher();
        for entry in m.registry().entries().to_vec() {
            for variant in &entry.variants {
                assert!(m.is_sponsor(variant), "variant {variant:?} did not match");
            }
        }
    }

    #[test]
    fn matches_legal_name_with_suffixes() {
        assert!(matcher().is_sponsor("ASML Holding N.V."));
    }

    #[test]
    fn matches_regardless_of_case() {
        assert!(matcher().is_sponsor("asml holding n.v."));
        assert!(matcher().is_sponsor("SHELL NEDERLAND B.V."));
    }

    #[test]
    fn matches_name_with_trailing_location_noise() {
        // Raw variant containment: the full string contains "ING Bank N.V.".
        assert!(matcher().is_sponsor("ING Bank N.V. Amsterdam"));
    }

    #[test]
    fn unknown_company_is_not_a_sponsor() {
        assert!(!matcher().is_sponsor("Random Startup Ltd."));
        assert!(!matcher().is_sponsor("Quantum Widgets"));
    }

    #[test]
    fn short_key_containment_is_preserved() {
        // Known precision/recall trade-off: "ing" is a registry key and a
        // substring of the cleaned name, so this matches.
        assert!(matcher().is_sponsor("Boeing Aerospace"));
    }

    #[test]
    fn works_with_custom_registries() {
        let registry = SponsorRegistry::from_entries(vec![
            SponsorEntry {
                canonical_key: "acme".into(),
                variants: vec!["Acme Corp.".into()],
            },
            SponsorEntry {
                canonical_key: "other".into(),
                variants: vec!["Other Org".into()],
            },
        ])
        .unwrap();
        let m = SponsorMatcher::new(Arc::new(registry));
        assert!(m.is_sponsor("Acme Corp."));
        assert!(!m.is_sponsor("Nonexistent Enterprises XYZQ"));
    }
}
