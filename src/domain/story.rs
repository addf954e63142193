//! Story domain model and the search endpoint's wire records.
//!
//! The endpoint returns `{"hits": [...]}` where each hit is a [`RawStory`]. Raw
//! records are mapped into [`Story`] values at the boundary so the rest of the
//! crate never sees wire field names like `objectID` or `num_comments`.

use serde::{Deserialize, Deserializer};

/// One search result as shown in the list.
///
/// `is_read` is local-only state. It is never sent by the endpoint and is
/// reset to `false` every time a fetch result replaces the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: String,
    pub url: String,
    pub title: String,
    pub author: String,
    pub comment_count: u32,
    pub score: u32,
    pub is_read: bool,
}

impl Story {
    /// Creates an unread story with zeroed counters.
    ///
    /// # Examples
    ///
    /// ```
    /// use hacker_stories::Story;
    ///
    /// let story = Story::new("0", "React");
    /// assert_eq!(story.id, "0");
    /// assert!(!story.is_read);
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: String::new(),
            title: title.into(),
            author: String::new(),
            comment_count: 0,
            score: 0,
            is_read: false,
        }
    }

    /// Label for the read toggle of this story.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        if self.is_read {
            "Mark as unread"
        } else {
            "Mark as read"
        }
    }
}

/// A hit as returned by the search endpoint.
///
/// The endpoint sends `null` for fields that do not apply to a hit (comments
/// have no `url` or `title`, some stories have no `points`). Those decode to
/// empty strings and zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawStory {
    #[serde(rename = "objectID", deserialize_with = "string_or_number")]
    pub object_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: u32,
}

impl From<RawStory> for Story {
    fn from(raw: RawStory) -> Self {
        Self {
            id: raw.object_id,
            url: raw.url,
            title: raw.title,
            author: raw.author,
            comment_count: raw.num_comments,
            score: raw.points,
            is_read: false,
        }
    }
}

/// Body of a search response. Only `hits` is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<RawStory>,
}

impl SearchResponse {
    /// Maps every hit into a [`Story`], preserving endpoint order.
    #[must_use]
    pub fn into_stories(self) -> Vec<Story> {
        self.hits.into_iter().map(Story::from).collect()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// objectID is a string on the wire, but fixtures and older mirrors send numbers.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}
