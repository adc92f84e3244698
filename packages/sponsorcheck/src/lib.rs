//! Recognized-sponsor classification engine for job-listing pages.
//!
//! Inspects a rendered job-board document, extracts employer names and job
//! postings, and classifies each employer against a curated registry of
//! sponsor names and their legal-entity variants.
//!
//! # Architecture
//!
//! Four subsystems, composed bottom-up:
//!
//! - [`canonical`] — pure name canonicalization (raw display name →
//!   comparison key),
//! - [`matcher`] — sponsor membership over the immutable [`registry`],
//! - [`extract`] — resilient extraction pipeline over ordered selector
//!   fallback ladders ([`selectors`]),
//! - [`monitor`] — re-runs the pipeline when the SPA host page mutates or
//!   virtually navigates.
//!
//! [`protocol`] exposes the request/reply surface spoken with the
//! popup/control layer; [`testing`] holds fixtures and mocks.
//!
//! The engine never treats a missing element as an error: absence is a
//! normal negative result, and incomplete job cards are dropped whole.

pub mod canonical;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod monitor;
pub mod protocol;
pub mod registry;
pub mod selectors;
pub mod testing;
pub mod types;

pub use canonical::canonicalize;
pub use error::RegistryError;
pub use extract::{current_company, extract_jobs, locate_job, JobLocation};
pub use matcher::SponsorMatcher;
pub use monitor::{ChangeMonitor, MonitorConfig, MutationBatch, PageView};
pub use protocol::{handle, Outcome, Reply, Request};
pub use registry::{SponsorEntry, SponsorRegistry};
pub use types::{
    CompanyVerdict, ExtractionUpdate, JobRecord, PageCommand, ScrollTarget, Trigger,
};
