//! Ordered domain candidate lists
//!
//! The built-in list is an immutable constant. Caller-supplied domains either
//! replace it or are placed ahead of it; the merge always produces a new owned
//! list so no session can observe another session's configuration.

use std::sync::Arc;

/// Built-in candidates, in priority order
pub const DEFAULT_DOMAINS: [&str; 10] = [
    "gmail.com",
    "docomo.ne.jp",
    "yahoo.co.jp",
    "yahoo.ne.jp",
    "ezweb.ne.jp",
    "icloud.com",
    "i.softbank.jp",
    "softbank.ne.jp",
    "ymobile.ne.jp",
    "hotmail.co.jp",
];

/// Immutable, ordered list of candidate domains.
///
/// Cloning is cheap; clones share the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateList {
    domains: Arc<[String]>,
}

impl CandidateList {
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: domains.into_iter().map(Into::into).collect(),
        }
    }

    pub fn defaults() -> Self {
        Self::new(DEFAULT_DOMAINS)
    }

    /// Combine caller domains with the built-in list.
    ///
    /// - `None`: the built-in list
    /// - `Some(list)` with `replace_defaults`: exactly `list`
    /// - `Some(list)` otherwise: `list` followed by the built-in list
    pub fn merged(overrides: Option<&[String]>, replace_defaults: bool) -> Self {
        match overrides {
            None => Self::defaults(),
            Some(list) if replace_defaults => Self::new(list.iter().cloned()),
            Some(list) => Self::new(
                list.iter()
                    .cloned()
                    .chain(DEFAULT_DOMAINS.iter().map(|d| d.to_string())),
            ),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.domains
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// True when both lists share the same storage
    pub fn ptr_eq(&self, other: &CandidateList) -> bool {
        Arc::ptr_eq(&self.domains, &other.domains)
    }
}

impl Default for CandidateList {
    fn default() -> Self {
        Self::defaults()
    }
}

impl AsRef<[String]> for CandidateList {
    fn as_ref(&self) -> &[String] {
        self.as_slice()
    }
}

impl<S: Into<String>> FromIterator<S> for CandidateList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_order() {
        let list = CandidateList::defaults();
        assert_eq!(list.len(), 10);
        assert_eq!(list.as_slice()[0], "gmail.com");
        assert_eq!(list.as_slice()[9], "hotmail.co.jp");
    }

    #[test]
    fn test_merge_without_overrides_uses_defaults() {
        assert_eq!(CandidateList::merged(None, true), CandidateList::defaults());
        assert_eq!(CandidateList::merged(None, false), CandidateList::defaults());
    }

    #[test]
    fn test_merge_replace() {
        let custom = vec!["custom.io".to_string()];
        let list = CandidateList::merged(Some(&custom), true);
        assert_eq!(list.as_slice(), &["custom.io".to_string()]);
    }

    #[test]
    fn test_merge_prepend() {
        let custom = vec!["custom.io".to_string(), "corp.example".to_string()];
        let list = CandidateList::merged(Some(&custom), false);
        assert_eq!(list.len(), 12);
        assert_eq!(list.as_slice()[0], "custom.io");
        assert_eq!(list.as_slice()[1], "corp.example");
        assert_eq!(list.as_slice()[2], "gmail.com");
    }

    #[test]
    fn test_merge_does_not_touch_defaults() {
        let custom = vec!["custom.io".to_string()];
        let _ = CandidateList::merged(Some(&custom), false);
        assert_eq!(CandidateList::defaults().len(), DEFAULT_DOMAINS.len());
    }

    #[test]
    fn test_clones_share_storage() {
        let list = CandidateList::defaults();
        let clone = list.clone();
        assert!(list.ptr_eq(&clone));
        assert!(!list.ptr_eq(&CandidateList::defaults()));
    }

    #[test]
    fn test_duplicates_are_kept() {
        let list: CandidateList = ["a.com", "a.com"].into_iter().collect();
        assert_eq!(list.len(), 2);
    }
}
