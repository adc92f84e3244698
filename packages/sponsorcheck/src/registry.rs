//! The recognized-sponsor registry.
//!
//! An ordered, immutable table mapping a short canonical key (e.g. `"asml"`)
//! to the official display-name variants of that organization
//! (e.g. `"ASML Holding N.V."`). The registry is loaded once and read-only
//! for the lifetime of the process, so it needs no locking.
//!
//! Matching iterates entries in registry order and short-circuits on the
//! first hit, so entry order is preserved exactly as loaded.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// One recognized sponsoring organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorEntry {
    /// Short lowercase identifier, unique across the registry.
    pub canonical_key: String,
    /// Known official display names, at least one per entry.
    pub variants: Vec<String>,
}

/// Immutable, ordered collection of [`SponsorEntry`] values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SponsorRegistry {
    entries: Vec<SponsorEntry>,
}

impl SponsorRegistry {
    /// Build a registry from entries, validating the registry invariants:
    /// unique non-empty canonical keys, at least one variant per entry.
    pub fn from_entries(entries: Vec<SponsorEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.canonical_key.trim().is_empty() {
                return Err(RegistryError::EmptyKey { index });
            }
            if !seen.insert(entry.canonical_key.as_str()) {
                return Err(RegistryError::DuplicateKey {
                    key: entry.canonical_key.clone(),
                });
            }
            if entry.variants.is_empty() {
                return Err(RegistryError::NoVariants {
                    key: entry.canonical_key.clone(),
                });
            }
        }

        tracing::debug!(entries = entries.len(), "Sponsor registry loaded");
        Ok(Self { entries })
    }

    /// Load a registry from a JSON snapshot:
    /// `[{"canonical_key": "...", "variants": ["..."]}, ...]`.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<SponsorEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// The built-in snapshot of recognized sponsors.
    pub fn builtin() -> &'static Self {
        static BUILTIN: LazyLock<SponsorRegistry> = LazyLock::new(|| {
            let entries = BUILTIN_SPONSORS
                .iter()
                .map(|(key, variants)| SponsorEntry {
                    canonical_key: (*key).to_string(),
                    variants: variants.iter().map(|v| (*v).to_string()).collect(),
                })
                .collect();
            // The built-in table is validated by tests; a broken snapshot is
            // a programming error, not a runtime condition.
            SponsorRegistry::from_entries(entries).expect("built-in sponsor registry is valid")
        });
        &BUILTIN
    }

    /// Entries in registry order.
    pub fn entries(&self) -> &[SponsorEntry] {
        &self.entries
    }

    /// Number of organizations in the registry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in sponsor snapshot: canonical key → official display-name variants.
const BUILTIN_SPONSORS: &[(&str, &[&str])] = &[
    ("asml", &["ASML", "ASML Holding N.V.", "ASML Netherlands B.V.", "ASML Trading B.V."]),
    ("adyen", &["Adyen N.V."]),
    ("booking", &["Booking.com B.V."]),
    ("ing", &["ING Bank N.V."]),
    ("philips", &["Philips Electronics Nederland B.V.", "Philips", "Philips Medical Systems Nederland B.V."]),
    ("shell", &["Shell International B.V.", "Shell Nederland B.V."]),
    ("unilever", &["Unilever Nederland B.V."]),
    ("ahold", &["Ahold Delhaize", "Ahold Delhaize GSO B.V."]),
    ("albert heijn", &["Albert Heijn B.V."]),
    ("abn amro", &["ABN AMRO Bank N.V."]),
    ("kpmg", &["KPMG N.V.", "KPMG Advisory N.V."]),
    ("pwc", &["PricewaterhouseCoopers", "PwC Advisory N.V."]),
    ("deloitte", &["Deloitte Consulting B.V.", "Deloitte"]),
    ("microsoft", &["Microsoft Corporation", "Microsoft B.V."]),
    ("google", &["Google Netherlands B.V.", "Google"]),
    ("amazon", &["Amazon Development Center", "Amazon Netherlands B.V."]),
    ("uber", &["Uber Netherlands B.V.", "Uber B.V."]),
    ("netflix", &["Netflix International B.V."]),
    ("meta", &["Meta", "Facebook Netherlands B.V."]),
    ("apple", &["Apple Benelux B.V."]),
    ("intel", &["Intel Corporation"]),
    ("nvidia", &["Nvidia B.V."]),
    ("cisco", &["Cisco Systems International B.V."]),
    ("ibm", &["IBM Nederland B.V."]),
    ("capgemini", &["Capgemini Nederland B.V."]),
    ("accenture", &["Accenture B.V."]),
    ("tcs", &["Tata Consultancy Services Netherlands B.V."]),
    ("infosys", &["Infosys Limited"]),
    ("tomtom", &["TomTom International B.V."]),
    ("heineken", &["Heineken International B.V."]),
    ("klm", &["KLM Royal Dutch Airlines"]),
    ("oracle", &["Oracle Nederland B.V.", "Oracle Corporation", "Oracle", "Oracle Netherlands"]),
];
