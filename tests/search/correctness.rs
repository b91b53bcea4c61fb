//! End-to-end matching correctness on small hand-checked catalogs.

use super::common::{apparel_index, assert_close, ids, make_index, make_shoe_catalog};
use catsearch::{format_score, match_query, MatchConfig, Matcher};

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_all_tokens_exact() {
    let index = make_index(&[("1", &["red", "shoe"])]);
    let outcome = match_query("red shoe", &index);

    assert_eq!(outcome.count, 1);
    assert_eq!(format_score(outcome.results[0].score), "1.0");
    assert_eq!(outcome.results[0].fields(), ["red", "shoe"]);
}

#[test]
fn test_one_exact_one_partial() {
    let index = make_index(&[("1", &["red", "shoes"])]);
    let outcome = match_query("red shoe", &index);

    assert_eq!(outcome.count, 1);
    assert_close(outcome.results[0].score, 0.65);
}

#[test]
fn test_no_shared_prefix() {
    let index = make_index(&[("1", &["blue", "hat"])]);
    let outcome = match_query("red shoe", &index);

    assert_eq!(outcome.count, 0);
    assert!(outcome.results.is_empty());
}

#[test]
fn test_empty_query_matches_nothing() {
    let index = apparel_index();
    for query in ["", "   ", "\t"] {
        let outcome = match_query(query, &index);
        assert_eq!(outcome.count, 0, "query {:?}", query);
        assert!(outcome.results.is_empty());
    }
}

#[test]
fn test_count_exceeds_printed_results() {
    let index = make_shoe_catalog(15);
    let outcome = match_query("shoe", &index);

    assert_eq!(outcome.count, 15);
    assert_eq!(outcome.results.len(), 10);
    let expected: Vec<String> = (0..10).map(|i| format!("{:03}", i)).collect();
    assert_eq!(ids(&outcome), expected);
    for pair in outcome.results.windows(2) {
        assert!(pair[0].score > pair[1].score);
    }
}

// ============================================================================
// APPAREL CATALOG
// ============================================================================

#[test]
fn test_apparel_red_shoe() {
    let index = apparel_index();
    let outcome = match_query("red shoe", &index);

    assert_eq!(outcome.count, 4);
    assert_eq!(ids(&outcome), vec!["5", "1", "2", "4"]);
    assert_close(outcome.results[0].score, 1.0);
    assert_close(outcome.results[1].score, 2.0 / 4.0);
    assert_close(outcome.results[2].score, 1.3 / 3.0);
    assert_close(outcome.results[3].score, 0.3 / 2.0);
}

#[test]
fn test_case_insensitive_query() {
    let index = apparel_index();
    let outcome = match_query("RED", &index);

    assert_eq!(ids(&outcome), vec!["5", "2", "1"]);
    // Original casing is what gets reported
    assert_eq!(outcome.results[0].fields(), ["Red", "Shoe"]);
}

#[test]
fn test_brand_field_is_searchable() {
    let index = apparel_index();
    let outcome = match_query("acme", &index);
    assert_eq!(ids(&outcome), vec!["3", "1"]);
}

#[test]
fn test_truncated_query_matches_by_prefix() {
    let index = apparel_index();
    let outcome = match_query("sho", &index);

    assert_eq!(outcome.count, 4);
    assert_eq!(ids(&outcome), vec!["4", "5", "2", "1"]);
    assert_close(outcome.results[0].score, 0.15);
}

#[test]
fn test_longer_query_matches_shorter_word() {
    let index = apparel_index();
    let outcome = match_query("shoelaces", &index);

    // "shoes" and "shoelaces" share "sho" but neither is a prefix of the other
    assert_eq!(outcome.count, 3);
    assert_eq!(ids(&outcome), vec!["4", "5", "1"]);
}

// ============================================================================
// PREFIX PRUNE LIMITS
// ============================================================================

#[test]
fn test_word_with_different_leading_chars_is_not_a_candidate() {
    let index = make_index(&[("1", &["xshoe"])]);
    assert_eq!(match_query("shoe", &index).count, 0);
}

#[test]
fn test_short_catalog_word_only_reached_by_short_token() {
    let index = make_index(&[("1", &["sh"])]);
    assert_eq!(match_query("shoe", &index).count, 0);

    let outcome = match_query("sh", &index);
    assert_eq!(outcome.count, 1);
    assert_close(outcome.results[0].score, 1.0);
}

#[test]
fn test_record_without_descriptors_never_matches() {
    let index = make_index(&[("1", &[]), ("2", &["red"])]);
    let outcome = match_query("red", &index);
    assert_eq!(ids(&outcome), vec!["2"]);
}

#[test]
fn test_duplicate_id_uses_last_row() {
    let index = make_index(&[("1", &["red", "shoe"]), ("1", &["blue", "hat"])]);
    assert_eq!(match_query("red", &index).count, 0);
    assert_eq!(match_query("hat", &index).count, 1);
}

// ============================================================================
// CONFIG
// ============================================================================

#[test]
fn test_result_limit_config() {
    let index = make_shoe_catalog(15);
    let config = MatchConfig {
        result_limit: 3,
        ..MatchConfig::default()
    };
    let outcome = Matcher::new(&index, config).match_query("shoe");

    assert_eq!(outcome.count, 15);
    assert_eq!(ids(&outcome), vec!["000", "001", "002"]);
}
