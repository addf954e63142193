//! Search query model.
//!
//! A [`Query`] pairs the user-editable search term with the request URL that is
//! actually being fetched. The two move independently: typing changes only the
//! term, while submitting derives a new URL from it.

/// Search endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search?query=";

/// Term used when nothing has been persisted yet.
pub const DEFAULT_TERM: &str = "React";

/// Storage key under which the last term is remembered.
pub const SEARCH_KEY: &str = "search";

/// Builds the request URL for a term.
///
/// The term is percent-encoded and appended to `endpoint`, which is expected
/// to end with the query parameter name (e.g. `...search?query=`).
///
/// # Examples
///
/// ```
/// use hacker_stories::domain::query::{request_url, DEFAULT_ENDPOINT};
///
/// assert_eq!(
///     request_url(DEFAULT_ENDPOINT, "rust async"),
///     "https://hn.algolia.com/api/v1/search?query=rust%20async"
/// );
/// ```
#[must_use]
pub fn request_url(endpoint: &str, term: &str) -> String {
    format!("{endpoint}{}", urlencoding::encode(term))
}

/// Current search term and the URL of the committed request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Text in the search input. Updated on every keystroke.
    pub term: String,

    /// URL of the most recently committed request.
    ///
    /// Empty until the controller initializes. Only changes through
    /// [`Query::commit`].
    pub request_url: String,
}

impl Query {
    /// Creates a query whose URL is already committed for `term`.
    #[must_use]
    pub fn committed(endpoint: &str, term: impl Into<String>) -> Self {
        let term = term.into();
        let request_url = request_url(endpoint, &term);
        Self { term, request_url }
    }

    /// Whether the current term may be submitted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.term.is_empty()
    }

    /// Derives `request_url` from the current term.
    ///
    /// Returns the new URL, or `None` when the term is empty and the submit is
    /// rejected.
    pub fn commit(&mut self, endpoint: &str) -> Option<&str> {
        if !self.can_submit() {
            return None;
        }
        self.request_url = request_url(endpoint, &self.term);
        Some(&self.request_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_term_leaves_url_alone() {
        let mut query = Query::committed(DEFAULT_ENDPOINT, "React");
        let before = query.request_url.clone();

        query.term = "Redux".to_string();

        assert_eq!(query.request_url, before);
    }

    #[test]
    fn commit_follows_term() {
        let mut query = Query::committed(DEFAULT_ENDPOINT, "React");
        query.term = "Redux".to_string();

        let url = query.commit(DEFAULT_ENDPOINT).map(str::to_string);

        assert_eq!(url.as_deref(), Some("https://hn.algolia.com/api/v1/search?query=Redux"));
        assert_eq!(query.request_url, "https://hn.algolia.com/api/v1/search?query=Redux");
    }

    #[test]
    fn empty_term_is_rejected() {
        let mut query = Query::committed(DEFAULT_ENDPOINT, "React");
        query.term.clear();

        assert!(!query.can_submit());
        assert!(query.commit(DEFAULT_ENDPOINT).is_none());
        assert_eq!(query.request_url, "https://hn.algolia.com/api/v1/search?query=React");
    }

    #[test]
    fn whitespace_term_is_submittable() {
        let query = Query { term: " ".to_string(), request_url: String::new() };
        assert!(query.can_submit());
    }
}
