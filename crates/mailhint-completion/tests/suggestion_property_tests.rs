/// Property-based tests for domain prefix matching
///
/// Covers the matching contract: no `@` means no suggestion, the first
/// candidate in list order wins, and a fully typed domain needs no suggestion.

use proptest::prelude::*;
use mailhint_completion::{suggest, CandidateList};

/// Strategy for generating domain-like candidates
fn domain_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}\\.(com|jp|io|net)".prop_map(|s| s.to_string())
}

/// Strategy for generating the local part of an address (may contain `@`)
fn local_part_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9.@]{0,12}".prop_map(|s| s.to_string())
}

proptest! {
    /// Property: text without `@` never gets a suggestion
    #[test]
    fn prop_no_at_sign_no_suggestion(
        text in "[a-z0-9.]{0,20}",
        candidates in prop::collection::vec(domain_strategy(), 0..10)
    ) {
        prop_assert_eq!(suggest(&text, &candidates), "");
    }

    /// Property: a strict prefix of a candidate completes to the first matching candidate
    #[test]
    fn prop_first_matching_candidate_completes(
        local in local_part_strategy(),
        candidates in prop::collection::vec(domain_strategy(), 1..10),
        pick in any::<prop::sample::Index>(),
        cut in any::<prop::sample::Index>()
    ) {
        let target = &candidates[pick.index(candidates.len())];
        let split = 1 + cut.index(target.len() - 1);
        let partial = &target[..split];
        let text = format!("{}@{}", local, partial);

        let first = candidates
            .iter()
            .find(|c| c.starts_with(partial))
            .expect("target itself matches");

        prop_assert_eq!(suggest(&text, &candidates), &first[partial.len()..]);
    }

    /// Property: a fully typed domain gets no suggestion when it is the first match
    #[test]
    fn prop_full_domain_no_suggestion(
        local in local_part_strategy(),
        domain in domain_strategy(),
        rest in prop::collection::vec(domain_strategy(), 0..10)
    ) {
        let mut candidates = vec![domain.clone()];
        candidates.extend(rest);
        let text = format!("{}@{}", local, domain);

        prop_assert_eq!(suggest(&text, &candidates), "");
    }

    /// Property: suggestion plus typed text always spells a candidate
    #[test]
    fn prop_completion_is_a_candidate(
        local in local_part_strategy(),
        partial in "[a-z.]{1,4}"
    ) {
        let candidates = CandidateList::defaults();
        let text = format!("{}@{}", local, partial);
        let suggestion = suggest(&text, candidates.as_slice());

        if !suggestion.is_empty() {
            let completed = format!("{}{}", partial, suggestion);
            prop_assert!(candidates.iter().any(|c| c == completed));
        }
    }

    /// Property: matching never mutates or reorders candidates
    #[test]
    fn prop_candidates_unchanged(
        text in "[a-z@.]{0,20}",
        candidates in prop::collection::vec(domain_strategy(), 0..10)
    ) {
        let before = candidates.clone();
        let _ = suggest(&text, &candidates);
        prop_assert_eq!(before, candidates);
    }
}

#[test]
fn test_order_sensitivity() {
    assert_eq!(suggest("x@ab", &["ab.com", "abc.com"]), ".com");
}
