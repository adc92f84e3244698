//! The change monitor: decides *when* to re-run the extraction pipeline.
//!
//! The host page is a long-lived single-page application that re-renders
//! without full navigations, so the monitor reacts to three triggers:
//!
//! - structural mutations whose *added* nodes contain a company-name
//!   container (removed nodes and attribute churn are ignored, to avoid
//!   reprocessing storms from unrelated DOM noise),
//! - virtual navigations, detected by polling the current address on every
//!   mutation batch and re-running after a settle delay,
//! - a single initial run scheduled at startup, for pages that finished
//!   rendering before the monitor attached.
//!
//! Settle-delay timers are fire-and-forget and not cancelable; overlapping
//! triggers simply produce redundant runs, which is acceptable because the
//! pipeline is idempotent. No extraction outcome is fatal: the loop keeps
//! running until the mutation source closes.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use scraper::Html;
use tokio::sync::mpsc;

use crate::extract::extract_jobs;
use crate::matcher::SponsorMatcher;
use crate::selectors;
use crate::types::{ExtractionUpdate, Trigger};

/// Read access to the live document, provided by the host adapter.
#[async_trait]
pub trait PageView: Send + Sync {
    /// Current serialized state of the rendered document.
    async fn snapshot(&self) -> String;
    /// Current navigable address.
    async fn current_url(&self) -> String;
}

/// One batch of structural mutation notifications.
///
/// `added_fragments` holds the serialized HTML of nodes added in this
/// batch. Attribute-only mutations arrive as batches with no fragments.
#[derive(Debug, Clone, Default)]
pub struct MutationBatch {
    pub added_fragments: Vec<String>,
}

impl MutationBatch {
    /// Batch for a set of added nodes.
    pub fn added(fragments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            added_fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Batch representing attribute-only churn (nothing added).
    pub fn attributes_only() -> Self {
        Self::default()
    }

    /// True when any added node is, or contains, a company-name container.
    fn is_relevant(&self) -> bool {
        self.added_fragments.iter().any(|fragment| {
            let parsed = Html::parse_fragment(fragment);
            selectors::MONITOR_MARKERS.hits_fragment(&parsed)
        })
    }
}

/// Monitor tuning knobs.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Wait before re-running after startup or a virtual navigation, to let
    /// asynchronous rendering finish.
    pub settle_delay: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(1000),
        }
    }
}

/// Watches a [`PageView`] and pushes an [`ExtractionUpdate`] for every
/// pipeline run it decides to make.
pub struct ChangeMonitor {
    matcher: SponsorMatcher,
    page: Arc<dyn PageView>,
    updates: mpsc::Sender<ExtractionUpdate>,
    config: MonitorConfig,
}

impl ChangeMonitor {
    pub fn new(
        matcher: SponsorMatcher,
        page: Arc<dyn PageView>,
        updates: mpsc::Sender<ExtractionUpdate>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            matcher,
            page,
            updates,
            config,
        }
    }

    /// Run the monitor loop until the mutation source closes, then drain
    /// any still-pending scheduled re-runs.
    pub async fn run(self, mut mutations: mpsc::Receiver<MutationBatch>) {
        let (rerun_tx, mut rerun_rx) = mpsc::channel::<Trigger>(8);

        // Initial pass: the page may already be fully rendered.
        self.schedule_rerun(rerun_tx.clone(), Trigger::Initial);

        let mut last_url = self.page.current_url().await;
        tracing::debug!(url = %last_url, "Change monitor attached");

        loop {
            tokio::select! {
                maybe_batch = mutations.recv() => {
                    let Some(batch) = maybe_batch else {
                        break; // host detached
                    };

                    // Address poll runs on every batch, decoupled from the
                    // structural check: virtual navigations do not always
                    // produce a detectable mutation of their own.
                    let url = self.page.current_url().await;
                    if url != last_url {
                        tracing::debug!(from = %last_url, to = %url, "Virtual navigation detected");
                        last_url = url;
                        self.schedule_rerun(rerun_tx.clone(), Trigger::UrlChange);
                    }

                    if batch.is_relevant() {
                        tracing::debug!(
                            added = batch.added_fragments.len(),
                            "Relevant nodes added, reprocessing"
                        );
                        self.run_pipeline(Trigger::DomChange).await;
                    }
                }
                Some(trigger) = rerun_rx.recv() => {
                    self.run_pipeline(trigger).await;
                }
            }
        }

        // Let already-scheduled settle timers fire before shutting down.
        drop(rerun_tx);
        while let Some(trigger) = rerun_rx.recv().await {
            self.run_pipeline(trigger).await;
        }

        tracing::debug!("Change monitor stopped");
    }

    /// Fire-and-forget settle-delayed re-run. Not cancelable; a redundant
    /// fire is tolerated because the pipeline is idempotent.
    fn schedule_rerun(&self, rerun_tx: mpsc::Sender<Trigger>, trigger: Trigger) {
        let settle = self.config.settle_delay;
        tokio::spawn(async move {
            tokio::time::sleep(settle).await;
            if rerun_tx.send(trigger).await.is_err() {
                tracing::debug!(?trigger, "Monitor gone before scheduled re-run fired");
            }
        });
    }

    async fn run_pipeline(&self, trigger: Trigger) {
        let snapshot = self.page.snapshot().await;
        let jobs = extract_jobs(&snapshot, &self.matcher);
        tracing::debug!(?trigger, jobs = jobs.len(), "Pipeline run finished");

        let update = ExtractionUpdate {
            trigger,
            jobs,
            captured_at: Utc::now(),
        };
        if self.updates.send(update).await.is_err() {
            // Consumer gone; keep watching regardless, nothing here is fatal.
            tracing::warn!("Extraction update dropped: consumer closed");
        }
    }
}
