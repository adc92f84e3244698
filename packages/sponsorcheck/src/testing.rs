//! Testing utilities: HTML fixtures and a mock page view.
//!
//! Useful for testing applications built on the engine without a live
//! document. Fixtures use the newest job-board markup revision.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::monitor::PageView;

/// One job-card fixture with a structural id attribute.
pub fn job_card(job_id: &str, company: &str, title: &str) -> String {
    format!(
        r#"<li class="job-card-container" data-job-id="{job_id}">
            <a class="job-card-container__link" href="/jobs/view/{job_id}/">{title}</a>
            <span class="job-card-container__company-name">{company}</span>
        </li>"#
    )
}

/// A job-card fixture with company and title but no resolvable id: no id
/// attribute and no posting link.
pub fn job_card_without_id(company: &str, title: &str) -> String {
    format!(
        r#"<li class="job-card-container">
            <span class="job-card-list__title">{title}</span>
            <span class="job-card-container__company-name">{company}</span>
        </li>"#
    )
}

/// A full job-board document wrapping the given cards.
pub fn job_board(cards: &[String]) -> String {
    format!(
        r#"<html><body><ul class="jobs-list">{}</ul></body></html>"#,
        cards.join("\n")
    )
}

/// A company profile page showing one primary company.
pub fn profile_page(company: &str) -> String {
    format!(
        r#"<html><body>
            <h1 class="org-top-card-summary__title">{company}</h1>
        </body></html>"#
    )
}

/// A [`PageView`] over in-memory state, mutable from tests to simulate
/// re-renders and virtual navigations.
pub struct MockPage {
    html: RwLock<String>,
    url: RwLock<String>,
}

impl MockPage {
    pub fn new(html: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            html: RwLock::new(html.into()),
            url: RwLock::new(url.into()),
        }
    }

    /// Replace the rendered document, as an SPA re-render would.
    pub fn set_html(&self, html: impl Into<String>) {
        *self.html.write().unwrap() = html.into();
    }

    /// Change the address without a full navigation.
    pub fn set_url(&self, url: impl Into<String>) {
        *self.url.write().unwrap() = url.into();
    }
}

#[async_trait]
impl PageView for MockPage {
    async fn snapshot(&self) -> String {
        self.html.read().unwrap().clone()
    }

    async fn current_url(&self) -> String {
        self.url.read().unwrap().clone()
    }
}
