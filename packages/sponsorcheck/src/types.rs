//! Core data types shared across the engine.
//!
//! Wire-facing types serialize with the field names the popup/control
//! surface already speaks (`jobId`, `isSponsor`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One job posting found during a single extraction pass.
///
/// Records are rebuilt from scratch on every pass and never mutated; two
/// passes relate only through `job_id` equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Stable identifier, from a structural attribute or the posting URL.
    pub job_id: String,
    /// Company text exactly as captured from the page.
    pub company_name_raw: String,
    /// Company text with trailing delimiter-separated segments removed.
    pub company_name_clean: String,
    /// Trimmed job-title text.
    pub job_title: String,
    /// Absolute URL to the posting.
    pub job_url: String,
    /// Verdict from the sponsor matcher applied to `company_name_clean`.
    pub is_sponsor: bool,
}

/// Verdict for the primary company shown on a company profile page.
///
/// Distinct from "no company element found", which is modeled as `None`
/// at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyVerdict {
    pub company_name: String,
    pub is_sponsor: bool,
}

/// What caused the change monitor to re-run the extraction pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Initial pass scheduled at startup.
    Initial,
    /// An added node matched a company-container marker.
    DomChange,
    /// The navigable address changed without a full navigation.
    UrlChange,
}

/// One completed extraction pass, pushed out by the change monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionUpdate {
    pub trigger: Trigger,
    pub jobs: Vec<JobRecord>,
    pub captured_at: DateTime<Utc>,
}

/// Scroll target sent by the control surface: either a job id or a posting
/// URL to derive one from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTarget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Commands for the presentation layer to execute against the live page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageCommand {
    /// Scroll the resolved job card into view, highlight it for
    /// `highlight_ms`, and activate `link_href` if present.
    ScrollToJob {
        job_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        link_href: Option<String>,
        highlight_ms: u64,
    },
}
