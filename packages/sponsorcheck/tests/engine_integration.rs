//! End-to-end tests for the extraction pipeline and protocol surface.

use sponsorcheck::testing::{job_board, job_card, job_card_without_id, profile_page};
use sponsorcheck::{canonicalize, extract_jobs, handle, Reply, Request, SponsorMatcher};

#[test]
fn canonicalization_examples() {
    assert_eq!(canonicalize("ASML Holding N.V."), "asml");
    assert_eq!(canonicalize(""), "");
}

#[test]
fn sponsor_verdict_examples() {
    let matcher = SponsorMatcher::builtin();
    assert!(matcher.is_sponsor("ASML Holding N.V."));
    assert!(!matcher.is_sponsor("Random Startup Ltd."));
    assert!(!matcher.is_sponsor(""));
}

#[test]
fn single_card_extraction_example() {
    let html = job_board(&[job_card(
        "12345",
        "Shell International B.V. · Amsterdam",
        "Data Engineer",
    )]);
    let jobs = extract_jobs(&html, &SponsorMatcher::builtin());

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].job_id, "12345");
    assert_eq!(jobs[0].company_name_clean, "Shell International B.V.");
    assert_eq!(jobs[0].job_title, "Data Engineer");
    assert!(jobs[0].is_sponsor);
}

#[test]
fn unaddressable_card_reduces_count_by_one() {
    let matcher = SponsorMatcher::builtin();
    let complete = job_board(&[
        job_card("1", "ASML", "Engineer"),
        job_card("2", "Acme", "Engineer"),
    ]);
    let one_unaddressable = job_board(&[
        job_card("1", "ASML", "Engineer"),
        job_card_without_id("Acme", "Engineer"),
    ]);

    let full = extract_jobs(&complete, &matcher);
    let reduced = extract_jobs(&one_unaddressable, &matcher);
    assert_eq!(full.len() - 1, reduced.len());
}

#[test]
fn reruns_are_set_equal_on_unchanged_documents() {
    let matcher = SponsorMatcher::builtin();
    let html = job_board(&[
        job_card("10", "ING Bank N.V. · Amsterdam", "Analyst"),
        job_card("11", "Bakkerij de Hoek", "Bakker"),
    ]);

    let first = extract_jobs(&html, &matcher);
    let second = extract_jobs(&html, &matcher);

    let ids = |jobs: &[sponsorcheck::JobRecord]| {
        jobs.iter()
            .map(|j| (j.job_id.clone(), j.is_sponsor))
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn protocol_round_trip_over_json() {
    let matcher = SponsorMatcher::builtin();
    let html = job_board(&[job_card("7", "Adyen N.V. · Amsterdam", "Rust Engineer")]);

    let request: Request = serde_json::from_str(r#"{"action": "getJobsInfo"}"#).unwrap();
    let outcome = handle(&matcher, &html, &request);

    let reply = serde_json::to_value(outcome.reply.unwrap()).unwrap();
    assert_eq!(reply["jobs"][0]["jobId"], "7");
    assert_eq!(reply["jobs"][0]["isSponsor"], true);
}

#[test]
fn company_query_mode_over_protocol() {
    let matcher = SponsorMatcher::builtin();

    let outcome = handle(&matcher, &profile_page("Philips"), &Request::GetCompanyInfo);
    assert!(matches!(
        outcome.reply,
        Some(Reply::Company { is_sponsor: true, .. })
    ));
}
