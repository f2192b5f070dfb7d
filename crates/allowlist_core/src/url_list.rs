use url::Url;

use crate::AllowListError;

/// Ordered list of allowed URLs.
///
/// Display order is insertion order and duplicates are allowed. Entries may be
/// empty while a cell is being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlList {
    entries: Vec<String>,
}

impl UrlList {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Appends an empty entry and returns its index.
    pub fn push_blank(&mut self) -> usize {
        self.push(String::new())
    }

    /// Appends `value` and returns its index.
    pub fn push(&mut self, value: impl Into<String>) -> usize {
        self.entries.push(value.into());
        self.entries.len() - 1
    }

    pub fn update(&mut self, index: usize, value: impl Into<String>) -> Result<(), AllowListError> {
        let len = self.entries.len();
        let slot = self
            .entries
            .get_mut(index)
            .ok_or(AllowListError::IndexOutOfRange { index, len })?;
        *slot = value.into();
        Ok(())
    }

    /// Removes the entry at `index`, shifting later entries left by one.
    pub fn remove(&mut self, index: usize) -> Result<String, AllowListError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn check_index(&self, index: usize) -> Result<(), AllowListError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(AllowListError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Same length and the same values in the same order.
    pub fn matches(&self, other: &UrlList) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().zip(&other.entries).all(|(a, b)| a == b)
    }
}

impl<S: Into<String>> FromIterator<S> for UrlList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a UrlList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Advisory check used for display hints: an absolute http(s) URL with a host.
pub fn looks_like_url(entry: &str) -> bool {
    match Url::parse(entry.trim()) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some(),
        Err(_) => false,
    }
}

/// Normalize a URL for duplicate hints: trim, lowercase, drop a trailing slash.
pub fn normalize_url_for_compare(entry: &str) -> String {
    let lowered = entry.trim().to_ascii_lowercase();
    lowered
        .strip_suffix('/')
        .map(ToOwned::to_owned)
        .unwrap_or(lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> UrlList {
        entries.iter().copied().collect()
    }

    #[test]
    fn remove_shifts_following_entries_left() {
        let mut urls = list(&["a", "b", "c", "d"]);
        assert_eq!(urls.remove(1).unwrap(), "b");
        assert_eq!(urls.as_slice(), ["a", "c", "d"]);
    }

    #[test]
    fn out_of_range_leaves_list_untouched() {
        let mut urls = list(&["a", "b"]);
        assert_eq!(
            urls.update(2, "z"),
            Err(AllowListError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(urls.remove(5).is_err());
        assert_eq!(urls, list(&["a", "b"]));
    }

    #[test]
    fn matches_is_order_sensitive() {
        assert!(list(&["a", "b"]).matches(&list(&["a", "b"])));
        assert!(!list(&["a", "b"]).matches(&list(&["b", "a"])));
        assert!(!list(&["a"]).matches(&list(&["a", "a"])));
        assert!(UrlList::new().matches(&UrlList::new()));
    }

    #[test]
    fn push_blank_returns_new_index() {
        let mut urls = list(&["a"]);
        assert_eq!(urls.push_blank(), 1);
        assert_eq!(urls.get(1), Some(""));
        assert_eq!(urls.push("c"), 2);
        assert_eq!(urls.as_slice(), ["a", "", "c"]);
    }

    #[test]
    fn url_hints() {
        assert!(looks_like_url("https://api.example.com"));
        assert!(looks_like_url("  http://example.com/path "));
        assert!(!looks_like_url(""));
        assert!(!looks_like_url("example.com"));
        assert!(!looks_like_url("ftp://files.example.com"));
        assert_eq!(
            normalize_url_for_compare(" HTTPS://Example.com/ "),
            "https://example.com"
        );
    }
}
