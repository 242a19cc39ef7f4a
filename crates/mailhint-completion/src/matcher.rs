//! Domain prefix matching
//!
//! Only the text after the last `@` is considered. Candidates are scanned in
//! order and the first one starting with that text wins, so list order is the
//! only tie-break.

use crate::candidates::CandidateList;

/// The domain being typed: everything after the last `@`, if non-empty.
pub fn partial_domain(text: &str) -> Option<&str> {
    let (_, domain) = text.rsplit_once('@')?;
    if domain.is_empty() {
        None
    } else {
        Some(domain)
    }
}

/// Remaining characters of the first candidate extending the typed domain.
///
/// Returns `""` when `text` has no `@`, nothing follows the last `@`, no
/// candidate matches, or the typed domain already equals the matching
/// candidate. Matching is exact and case-sensitive.
pub fn suggest<'a, S: AsRef<str>>(text: &str, candidates: &'a [S]) -> &'a str {
    let Some(partial) = partial_domain(text) else {
        return "";
    };

    for candidate in candidates {
        let candidate: &str = candidate.as_ref();
        if let Some(rest) = candidate.strip_prefix(partial) {
            return rest;
        }
    }

    ""
}

/// Matcher bound to one candidate list
#[derive(Debug, Clone, Default)]
pub struct DomainMatcher {
    candidates: CandidateList,
}

impl DomainMatcher {
    pub fn new(candidates: CandidateList) -> Self {
        Self { candidates }
    }

    pub fn suggest(&self, text: &str) -> &str {
        suggest(text, self.candidates.as_slice())
    }

    pub fn partial_domain<'t>(&self, text: &'t str) -> Option<&'t str> {
        partial_domain(text)
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }
}
