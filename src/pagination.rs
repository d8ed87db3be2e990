//! HAL-style links and pagination helpers.
//!
//! List responses share the shape `{count, _embedded.<collection>,
//! _links.{self, previous, next, documentation}}`. The `next` link carries a
//! `from=<opaque-id>` query parameter seeding the next page.

use crate::errors::{MollieError, MollieResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// A single HAL link: `{href, type}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Target URL
    pub href: String,
    /// Media type of the target, usually `text/html` or `application/hal+json`
    #[serde(rename = "type")]
    pub kind: String,
}

/// The `_links` block of a paginated response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListLinks {
    /// The current page
    #[serde(rename = "self")]
    pub current: Link,
    /// The previous page, absent on the first page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<Link>,
    /// The next page, absent on the last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<Link>,
    /// Documentation for the listed resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Link>,
}

impl ListLinks {
    /// Extracts the opaque cursor from the `next` link, if any.
    ///
    /// Returns `None` when there is no next page, an empty string when the
    /// link carries no `from` parameter, and an error when its URL does not
    /// parse.
    pub fn next_cursor(&self) -> MollieResult<Option<String>> {
        match &self.next {
            Some(link) => cursor_from_url(&link.href).map(Some),
            None => Ok(None),
        }
    }
}

/// Reads the `from` query parameter out of a pagination URL.
///
/// Absence of the parameter yields the empty string, not an error; a URL
/// that fails to parse does error.
pub fn cursor_from_url(href: &str) -> MollieResult<String> {
    let url = Url::parse(href).map_err(MollieError::from)?;
    Ok(url
        .query_pairs()
        .find(|(key, _)| key == "from")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default())
}
