//! Ranking properties checked against a brute-force scan.

use std::collections::BTreeMap;

use super::{build, catalog_strategy, query_strategy};
use catsearch::{prefix_key, score_record, tokenize, MatchConfig, Record, DEFAULT_RESULT_LIMIT};
use proptest::prelude::*;

/// Scan every record, keep those sharing a prefix key with the query, score
/// and sort them. No index involved.
fn oracle(rows: &[(String, Vec<String>)], query: &str) -> (usize, Vec<(String, f64)>) {
    let config = MatchConfig::default();
    let tokens = tokenize(query);
    let token_keys: Vec<&str> = tokens.iter().map(|t| prefix_key(t, 3)).collect();

    let mut live: BTreeMap<&str, Record> = BTreeMap::new();
    for (id, fields) in rows {
        live.insert(id.as_str(), Record::new(id.as_str(), fields.clone()));
    }

    let mut scored: Vec<(String, f64)> = live
        .values()
        .filter(|r| r.words.iter().any(|w| token_keys.contains(&prefix_key(w, 3))))
        .map(|r| (r.id.clone(), score_record(&tokens, r, &config)))
        .filter(|(_, score)| *score > 0.0)
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let count = scored.len();
    scored.truncate(DEFAULT_RESULT_LIMIT);
    (count, scored)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The index returns exactly what a full scan would.
    #[test]
    fn prop_matches_full_scan(rows in catalog_strategy(), query in query_strategy()) {
        let index = build(&rows);
        let outcome = catsearch::match_query(&query, &index);
        let (count, expected) = oracle(&rows, &query);

        prop_assert_eq!(outcome.count, count);
        let actual: Vec<(String, f64)> = outcome
            .results
            .iter()
            .map(|r| (r.id().to_string(), r.score))
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_count_bounds_results(rows in catalog_strategy(), query in query_strategy()) {
        let index = build(&rows);
        let outcome = catsearch::match_query(&query, &index);

        prop_assert!(outcome.results.len() <= DEFAULT_RESULT_LIMIT);
        prop_assert!(outcome.count >= outcome.results.len());
        if outcome.count <= DEFAULT_RESULT_LIMIT {
            prop_assert_eq!(outcome.count, outcome.results.len());
        }
    }

    #[test]
    fn prop_scores_bounded(rows in catalog_strategy(), query in query_strategy()) {
        let index = build(&rows);
        let outcome = catsearch::match_query(&query, &index);
        let tokens = tokenize(&query).len() as f64;

        for r in &outcome.results {
            prop_assert!(r.score > 0.0);
            prop_assert!(r.score <= tokens);
            prop_assert!(r.score <= 1.0, "each match consumes one word");
        }
    }

    #[test]
    fn prop_sorted_with_id_tiebreak(rows in catalog_strategy(), query in query_strategy()) {
        let index = build(&rows);
        let outcome = catsearch::match_query(&query, &index);

        for pair in outcome.results.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.score >= b.score);
            if a.score == b.score {
                prop_assert!(a.id() < b.id());
            }
        }
    }

    #[test]
    fn prop_idempotent(rows in catalog_strategy(), query in query_strategy()) {
        let index = build(&rows);
        let first = catsearch::match_query(&query, &index);
        let second = catsearch::match_query(&query, &index);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_fields_reported_verbatim(rows in catalog_strategy(), query in query_strategy()) {
        let index = build(&rows);
        let outcome = catsearch::match_query(&query, &index);

        for r in &outcome.results {
            let last_row = rows.iter().rev().find(|(id, _)| id == r.id());
            prop_assert_eq!(Some(r.fields()), last_row.map(|(_, f)| f.as_slice()));
        }
    }

    /// With equal-length distinct words no partial match is possible, so
    /// adding a descriptor that equals an unmatched query token adds exactly
    /// one full match.
    #[test]
    fn prop_extra_full_match_never_lowers_score(
        words in prop::collection::btree_set("[a-z]{4}", 1..8),
        extra in "[a-z]{4}",
    ) {
        prop_assume!(!words.contains(&extra));
        let words: Vec<String> = words.into_iter().collect();
        let query = format!("{} {}", words[0], extra);
        let tokens = tokenize(&query);
        let config = MatchConfig::default();

        let before = Record::new("r", words.clone());
        let mut grown = words;
        grown.push(extra);
        let after = Record::new("r", grown);

        prop_assert!(
            score_record(&tokens, &after, &config) >= score_record(&tokens, &before, &config)
        );
    }
}
