//! Ordered selector fallback ladders.
//!
//! The host page has gone through several structural revisions, so every
//! lookup runs against an ordered list of candidate CSS selectors: newest
//! markup first, older fallbacks after. First selector that yields an
//! element wins. A selector that fails to parse is skipped with a warning
//! rather than taking the ladder down with it.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

/// An ordered list of precompiled CSS selectors, tried in priority order.
#[derive(Debug)]
pub struct SelectorChain {
    selectors: Vec<(&'static str, Selector)>,
}

impl SelectorChain {
    /// Compile a chain from selector sources, preserving order.
    pub fn new(sources: &[&'static str]) -> Self {
        let selectors = sources
            .iter()
            .filter_map(|source| match Selector::parse(source) {
                Ok(selector) => Some((*source, selector)),
                Err(e) => {
                    tracing::warn!(selector = *source, error = %e, "Skipping unparsable selector");
                    None
                }
            })
            .collect();
        Self { selectors }
    }

    /// The compiled selectors with their source strings, in ladder order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Selector)> + '_ {
        self.selectors.iter().map(|(source, sel)| (*source, sel))
    }

    /// First descendant of `scope` matched by any selector in the chain.
    pub fn first_in<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        for (source, selector) in &self.selectors {
            if let Some(element) = scope.select(selector).next() {
                tracing::trace!(selector = *source, "Chain hit");
                return Some(element);
            }
        }
        None
    }

    /// First element in the whole document matched by any selector.
    pub fn first_in_document<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        for (source, selector) in &self.selectors {
            if let Some(element) = document.select(selector).next() {
                tracing::trace!(selector = *source, "Chain hit");
                return Some(element);
            }
        }
        None
    }

    /// True when any selector matches somewhere in the given fragment,
    /// including the fragment's own root node.
    pub fn hits_fragment(&self, fragment: &Html) -> bool {
        self.selectors
            .iter()
            .any(|(_, selector)| fragment.select(selector).next().is_some())
    }
}

/// Job-card containers, newest page revision first.
pub static JOB_CARDS: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        ".job-card-container",
        ".jobs-search-results__list-item",
        "[data-job-id]",
        ".jobs-job-board-list__item",
        ".job-card-list__entity-lockup",
        ".jobs-search-results-grid__card-item",
    ])
});

/// Company-name sub-elements within a job card.
pub static COMPANY: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        ".job-card-container__company-name",
        ".job-card-container__primary-description",
        ".company-name",
        ".job-card-list__company-name",
        ".artdeco-entity-lockup__subtitle",
        ".job-card-container__company-link",
    ])
});

/// Job-title sub-elements within a job card.
pub static TITLE: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        ".job-card-container__link",
        ".job-card-list__title",
        ".jobs-unified-top-card__job-title",
        ".artdeco-entity-lockup__title",
        ".job-card-list__entity-lockup a",
    ])
});

/// Primary company element on a company profile page.
pub static PROFILE_COMPANY: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        ".org-top-card-summary__title",
        ".jobs-company__name",
        ".job-card-container__company-name",
        ".company-name-text",
        ".job-card-container__primary-description",
    ])
});

/// Company-container markers the change monitor watches for in added nodes.
pub static MONITOR_MARKERS: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&[
        ".jobs-company__name",
        ".job-card-container__company-name",
        ".org-top-card-summary__title",
    ])
});

/// Anchors that link to a job posting.
pub static JOB_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"a[href*="/jobs/view/"]"#).expect("job link selector parses")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_selectors_win() {
        let chain = SelectorChain::new(&[".primary", ".fallback"]);
        let doc = Html::parse_document(
            r#"<div><span class="fallback">old</span><span class="primary">new</span></div>"#,
        );
        let hit = chain.first_in_document(&doc).unwrap();
        assert_eq!(hit.text().collect::<String>(), "new");
    }

    #[test]
    fn falls_through_to_later_selectors() {
        let chain = SelectorChain::new(&[".primary", ".fallback"]);
        let doc = Html::parse_document(r#"<div><span class="fallback">old</span></div>"#);
        let hit = chain.first_in_document(&doc).unwrap();
        assert_eq!(hit.text().collect::<String>(), "old");
    }

    #[test]
    fn fragment_root_counts_as_a_hit() {
        let fragment = Html::parse_fragment(r#"<div class="jobs-company__name">Acme</div>"#);
        assert!(MONITOR_MARKERS.hits_fragment(&fragment));
    }

    #[test]
    fn fragment_descendant_counts_as_a_hit() {
        let fragment = Html::parse_fragment(
            r#"<section><div class="org-top-card-summary__title">Acme</div></section>"#,
        );
        assert!(MONITOR_MARKERS.hits_fragment(&fragment));
    }

    #[test]
    fn unrelated_fragment_does_not_hit() {
        let fragment = Html::parse_fragment(r#"<div class="like-counter">42</div>"#);
        assert!(!MONITOR_MARKERS.hits_fragment(&fragment));
    }
}
