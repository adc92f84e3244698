//! The extraction pipeline: rendered document in, job records out.
//!
//! Every lookup runs through the ordered selector ladders in
//! [`crate::selectors`], because the host page's markup changes between
//! revisions. Cards that cannot be fully resolved (no id, no company, no
//! title) are dropped whole; partial records are never emitted. Extraction
//! is a pure function of the document text, so re-running it on an
//! unchanged document yields the same records.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::matcher::SponsorMatcher;
use crate::selectors;
use crate::types::{CompanyVerdict, JobRecord};

/// Base for reconstructing an absolute posting URL from a job id.
pub const JOB_VIEW_URL: &str = "https://www.linkedin.com/jobs/view/";

/// Delimiter between the company name and trailing segments (location etc.).
const COMPANY_DELIMITER: char = '·';

/// Numeric job id embedded in a posting path like `/jobs/view/12345/`.
static JOB_ID_IN_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/view/(\d+)").expect("job id pattern compiles"));

static PAGE_ORIGIN: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://www.linkedin.com/").expect("page origin parses"));

/// Extract all resolvable job postings from a rendered document.
///
/// The job-card ladder degrades through historical page revisions: the
/// result set comes from the first selector that finds at least one card
/// yielding a complete record.
pub fn extract_jobs(html: &str, matcher: &SponsorMatcher) -> Vec<JobRecord> {
    let document = Html::parse_document(html);

    for (source, selector) in selectors::JOB_CARDS.iter() {
        let cards: Vec<ElementRef> = document.select(selector).collect();
        tracing::debug!(selector = source, cards = cards.len(), "Tried job-card selector");
        if cards.is_empty() {
            continue;
        }

        let records: Vec<JobRecord> = cards
            .iter()
            .filter_map(|card| resolve_card(*card, matcher))
            .collect();

        if !records.is_empty() {
            tracing::info!(
                selector = source,
                jobs = records.len(),
                "Extraction pass completed"
            );
            return records;
        }
    }

    tracing::debug!("No job cards resolved on this document");
    Vec::new()
}

/// Verdict for the primary company on a company profile page.
///
/// `None` means no company element matched any profile selector, which is
/// distinct from a company that was found but is not a sponsor.
pub fn current_company(html: &str, matcher: &SponsorMatcher) -> Option<CompanyVerdict> {
    let document = Html::parse_document(html);
    let element = selectors::PROFILE_COMPANY.first_in_document(&document)?;
    let company_name = element.text().collect::<String>().trim().to_string();
    let is_sponsor = matcher.is_sponsor(&company_name);
    Some(CompanyVerdict {
        company_name,
        is_sponsor,
    })
}

/// A scroll target resolved inside the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLocation {
    pub job_id: String,
    /// The selector that found the card, for the presentation layer.
    pub matched_selector: String,
    /// Posting link to activate, when the card carries one.
    pub link_href: Option<String>,
}

/// Locate the card for a job id, trying the id attributes first and the
/// posting-anchor form last.
pub fn locate_job(html: &str, job_id: &str) -> Option<JobLocation> {
    let document = Html::parse_document(html);

    let candidates = [
        format!(r#"[data-job-id="{job_id}"]"#),
        format!(r#"[data-occludable-job-id="{job_id}"]"#),
        format!(r#"a[href*="/jobs/view/{job_id}"]"#),
    ];

    for source in &candidates {
        let Ok(selector) = Selector::parse(source) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let link_href = if element.value().name() == "a" {
                element.value().attr("href").map(absolutize)
            } else {
                element
                    .select(&selectors::JOB_LINK)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .map(absolutize)
            };
            tracing::debug!(job_id, selector = source.as_str(), "Located scroll target");
            return Some(JobLocation {
                job_id: job_id.to_string(),
                matched_selector: source.clone(),
                link_href,
            });
        }
    }

    tracing::debug!(job_id, "Scroll target not found in document");
    None
}

/// Pull a numeric job id out of a posting URL, if one is present.
pub fn job_id_from_url(url: &str) -> Option<String> {
    JOB_ID_IN_PATH
        .captures(url)
        .map(|caps| caps[1].to_string())
}

fn resolve_card(card: ElementRef<'_>, matcher: &SponsorMatcher) -> Option<JobRecord> {
    let link = card.select(&selectors::JOB_LINK).next();

    // Prefer the structural id attributes; fall back to the posting path.
    let job_id = card
        .value()
        .attr("data-job-id")
        .or_else(|| card.value().attr("data-occludable-job-id"))
        .map(str::to_string)
        .or_else(|| {
            link.and_then(|a| a.value().attr("href"))
                .and_then(job_id_from_url)
        });

    let Some(job_id) = job_id else {
        tracing::trace!("Dropping card without a resolvable job id");
        return None;
    };

    let company_element = selectors::COMPANY.first_in(card)?;
    let title_element = selectors::TITLE.first_in(card)?;

    let company_name_raw = company_element.text().collect::<String>();
    let company_name_clean = company_name_raw
        .split(COMPANY_DELIMITER)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    let job_title = title_element.text().collect::<String>().trim().to_string();

    let job_url = link
        .and_then(|a| a.value().attr("href"))
        .map(absolutize)
        .unwrap_or_else(|| format!("{JOB_VIEW_URL}{job_id}/"));

    let is_sponsor = matcher.is_sponsor(&company_name_clean);

    Some(JobRecord {
        job_id,
        company_name_raw,
        company_name_clean,
        job_title,
        job_url,
        is_sponsor,
    })
}

/// Resolve a possibly-relative href against the page origin.
fn absolutize(href: &str) -> String {
    match Url::parse(href) {
        Ok(url) => url.into(),
        Err(_) => PAGE_ORIGIN
            .join(href)
            .map(Into::into)
            .unwrap_or_else(|_| href.to_string()),
    }
}
