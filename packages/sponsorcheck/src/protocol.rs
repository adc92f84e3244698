//! Request/reply protocol spoken with the popup/control surface.
//!
//! One request maps to exactly one reply, except `scrollToJob`, which is
//! fire-and-forget and instead emits a [`PageCommand`] for the presentation
//! layer. The wire format matches what the control surface already sends:
//! `{"action": "getJobsInfo"}` and friends. Transport mechanics (delivery,
//! retries, user-visible fallback text on channel failure) belong to the
//! host adapter, not to this module.

use serde::{Deserialize, Serialize};

use crate::extract;
use crate::matcher::SponsorMatcher;
use crate::types::{JobRecord, PageCommand, ScrollTarget};

/// How long the presentation layer keeps the scroll target highlighted.
pub const HIGHLIGHT_MS: u64 = 2000;

/// Reply text when no company element matched any profile selector.
const COMPANY_NOT_FOUND: &str = "Company name not found";

/// Inbound request from the control surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    GetJobsInfo,
    GetCompanyInfo,
    ScrollToJob {
        #[serde(rename = "jobData")]
        job_data: ScrollTarget,
    },
}

/// Outbound reply. Serialized shape mirrors the original wire format, so
/// the variants are untagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reply {
    Jobs {
        jobs: Vec<JobRecord>,
    },
    Company {
        #[serde(rename = "companyName")]
        company_name: String,
        #[serde(rename = "isSponsor")]
        is_sponsor: bool,
    },
    Error {
        error: String,
    },
}

/// Result of handling one request: at most one reply for the requester and
/// at most one command for the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    pub reply: Option<Reply>,
    pub command: Option<PageCommand>,
}

/// Handle one request against the latest document snapshot.
///
/// Pure dispatch: absence of elements is reported through replies
/// (`error` field) or omission (no command), never through failures.
pub fn handle(matcher: &SponsorMatcher, html: &str, request: &Request) -> Outcome {
    match request {
        Request::GetJobsInfo => {
            let jobs = extract::extract_jobs(html, matcher);
            tracing::debug!(jobs = jobs.len(), "Replying to getJobsInfo");
            Outcome {
                reply: Some(Reply::Jobs { jobs }),
                command: None,
            }
        }

        Request::GetCompanyInfo => {
            let reply = match extract::current_company(html, matcher) {
                Some(verdict) => Reply::Company {
                    company_name: verdict.company_name,
                    is_sponsor: verdict.is_sponsor,
                },
                None => Reply::Error {
                    error: COMPANY_NOT_FOUND.to_string(),
                },
            };
            Outcome {
                reply: Some(reply),
                command: None,
            }
        }

        Request::ScrollToJob { job_data } => {
            let command = resolve_scroll(html, job_data);
            Outcome {
                reply: None,
                command,
            }
        }
    }
}

fn resolve_scroll(html: &str, target: &ScrollTarget) -> Option<PageCommand> {
    let job_id = target
        .job_id
        .clone()
        .or_else(|| target.url.as_deref().and_then(extract::job_id_from_url));

    let Some(job_id) = job_id else {
        tracing::debug!("scrollToJob without a resolvable job id");
        return None;
    };

    let location = extract::locate_job(html, &job_id)?;
    Some(PageCommand::ScrollToJob {
        job_id: location.job_id,
        link_href: location.link_href,
        highlight_ms: HIGHLIGHT_MS,
    })
}
