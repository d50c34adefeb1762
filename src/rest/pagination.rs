//! Cursor-based pagination from the HTTP `Link` response header.
//!
//! List endpoints that return more results than fit in one page include an
//! RFC 5988 style `Link` header:
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2025-10/products.json?page_info=abc&limit=50>; rel="next",
//! <https://shop.myshopify.com/admin/api/2025-10/products.json?page_info=xyz&limit=50>; rel="previous"
//! ```
//!
//! [`Pagination::from_link_header`] parses that value into typed
//! [`PageCursor`]s the caller feeds back as `page_info`/`limit` query
//! parameters of the follow-up request. Parsing is strict: each
//! malformed-input case maps to a distinct [`PaginationError`] variant, and
//! resolution is atomic: it either yields a complete [`Pagination`] or a
//! single error, never a partial result.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::rest::Pagination;
//!
//! let header = r#"<https://shop.myshopify.com/products.json?page_info=abc&limit=50>; rel="next""#;
//! let pagination = Pagination::from_link_header(header).unwrap();
//!
//! let next = pagination.next.unwrap();
//! assert_eq!(next.page_info, "abc");
//! assert_eq!(next.limit, Some(50));
//! assert!(pagination.previous.is_none());
//!
//! // An absent header is the valid "single page of results" state
//! let pagination = Pagination::from_link_header("").unwrap();
//! assert!(pagination.next.is_none() && pagination.previous.is_none());
//! ```

use std::num::ParseIntError;

use thiserror::Error;
use url::Url;

/// Errors produced while resolving a `Link` header into a [`Pagination`].
///
/// A closed set of variants with structured fields; the rendered messages
/// stay compatible with what callers of the original API match on. All
/// failures abort resolution immediately; there is no partial result and no
/// retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// The header is present but an entry does not have the
    /// `<URL>; rel="..."` link syntax.
    #[error("could not extract pagination link header")]
    MalformedHeader,

    /// An entry's bracketed value is not a valid absolute URL.
    #[error("pagination does not contain a valid URL")]
    InvalidUrl,

    /// The link URL lacks the required `page_info` query parameter.
    #[error("page_info is missing")]
    MissingPageInfo,

    /// The query string contains a malformed percent escape.
    ///
    /// `escape` holds the offending token: the `%` plus up to two following
    /// characters.
    #[error("invalid URL escape {escape:?}")]
    MalformedEscape {
        /// The malformed escape token, e.g. `%in`.
        escape: String,
    },

    /// The `limit` query parameter is not a valid integer.
    #[error("parsing {value:?}: {source}")]
    InvalidLimit {
        /// The literal value that failed to parse.
        value: String,
        /// The underlying numeric-parse failure.
        source: ParseIntError,
    },
}

/// An opaque pagination token for one direction of traversal.
///
/// `page_info` is a server-issued cursor; `limit` is an optional page-size
/// hint carried alongside it. A cursor is meaningless without `page_info`,
/// so a link lacking one resolves to [`PaginationError::MissingPageInfo`]
/// rather than an empty cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    /// Opaque server-issued position token.
    pub page_info: String,
    /// Page size hint, if the link carried one.
    pub limit: Option<u32>,
}

impl PageCursor {
    /// Creates a cursor from a bare `page_info` token.
    #[must_use]
    pub fn new(page_info: impl Into<String>) -> Self {
        Self {
            page_info: page_info.into(),
            limit: None,
        }
    }

    /// Returns a copy of this cursor with the given page-size hint.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// The resolved pagination state of one list response.
///
/// `next` and `previous` are present only if the `Link` header carried a
/// link with that relation. Both absent is the valid "single page of
/// results" state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Cursor for the next page, if a `rel="next"` link existed.
    pub next: Option<PageCursor>,
    /// Cursor for the previous page, if a `rel="previous"` link existed.
    pub previous: Option<PageCursor>,
}

impl Pagination {
    /// Resolves a raw `Link` header value into a `Pagination`.
    ///
    /// An empty or blank header yields the default (no pages) value. The
    /// first link per relation wins; duplicate `rel="next"`/`rel="previous"`
    /// entries are ignored, as are links with any other relation value.
    ///
    /// Resolution is a pure function of its input and is atomic: any
    /// parse or decode failure is returned as the sole result.
    ///
    /// # Errors
    ///
    /// See [`PaginationError`] for the taxonomy.
    pub fn from_link_header(header: &str) -> Result<Self, PaginationError> {
        let mut pagination = Self::default();

        for entry in parse_link_header(header)? {
            match entry.rel.as_str() {
                "next" if pagination.next.is_none() => {
                    pagination.next = Some(decode_cursor(&entry.url)?);
                }
                "previous" if pagination.previous.is_none() => {
                    pagination.previous = Some(decode_cursor(&entry.url)?);
                }
                _ => {}
            }
        }

        Ok(pagination)
    }
}

/// One parsed element of the `Link` header: a URL and its relation value.
///
/// Constructed and consumed entirely within header resolution.
#[derive(Debug, Clone)]
struct LinkEntry {
    url: Url,
    rel: String,
}

/// Splits a `Link` header into its entries.
///
/// An empty header produces an empty sequence, the "no more pages" case.
fn parse_link_header(header: &str) -> Result<Vec<LinkEntry>, PaginationError> {
    if header.trim().is_empty() {
        return Ok(Vec::new());
    }

    header.split(',').map(parse_link_entry).collect()
}

/// Parses a single `<URL>; rel="value"` entry.
///
/// Attributes other than `rel` are ignored. The relation value is kept
/// verbatim (matching is case-sensitive downstream).
fn parse_link_entry(entry: &str) -> Result<LinkEntry, PaginationError> {
    let entry = entry.trim();

    let (raw_url, attributes) = entry
        .strip_prefix('<')
        .and_then(|rest| rest.split_once('>'))
        .ok_or(PaginationError::MalformedHeader)?;

    let rel = attributes
        .split(';')
        .find_map(|part| part.trim().strip_prefix("rel="))
        .map(|value| value.trim_matches('"').to_string())
        .ok_or(PaginationError::MalformedHeader)?;

    let url = Url::parse(raw_url).map_err(|_| PaginationError::InvalidUrl)?;
    if url.host_str().is_none() {
        return Err(PaginationError::InvalidUrl);
    }

    Ok(LinkEntry { url, rel })
}

/// Decodes a [`PageCursor`] from a link URL's query string.
fn decode_cursor(url: &Url) -> Result<PageCursor, PaginationError> {
    let mut page_info: Option<String> = None;
    let mut limit: Option<u32> = None;

    let query = url.query().unwrap_or("");
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = unescape_query_component(raw_key)?;
        let value = unescape_query_component(raw_value)?;

        match key.as_str() {
            "page_info" if page_info.is_none() => page_info = Some(value),
            "limit" if limit.is_none() => {
                let parsed = value
                    .parse::<u32>()
                    .map_err(|source| PaginationError::InvalidLimit {
                        value: value.clone(),
                        source,
                    })?;
                limit = Some(parsed);
            }
            _ => {}
        }
    }

    match page_info {
        Some(page_info) if !page_info.is_empty() => Ok(PageCursor { page_info, limit }),
        _ => Err(PaginationError::MissingPageInfo),
    }
}

/// Strictly percent-decodes one query component.
///
/// `+` decodes to a space, as in form/query decoding. A `%` not followed by
/// two hex digits is rejected with the offending token, never passed
/// through.
fn unescape_query_component(raw: &str) -> Result<String, PaginationError> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_value);
                let lo = bytes.get(i + 2).copied().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        let escape: String = raw[i..].chars().take(3).collect();
                        return Err(PaginationError::MalformedEscape { escape });
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }

    Ok(String::from_utf8_lossy(&out).into_owned())
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
