//! Link header parsing.
//!
//! A header is parsed in three stages:
//!
//! 1. the header length is checked against [`Config::max_header_length`] before anything else,
//! 2. the header is split on commas into link-values, commas inside a quoted string or inside a
//!    URI reference (`<...>`) are not split points,
//! 3. each link-value is built into one [`Link`] per word of its `rel` parameter.
//!
//! Malformed link-values, without URI reference or without `rel`, are dropped. When the same
//! relation type appears more than once, the last one wins.
//!
//! Splitting is a single forward scan, the parser never backtracks.
mod matches;
mod scan;
mod guard;
mod query;
mod config;
mod error;
mod entry;
mod links;

pub use config::{Config, DEFAULT_MAX_HEADER_LENGTH, ENV_ERROR_ON_MAX_HEADER_LENGTH, ENV_MAX_HEADER_LENGTH};
pub use error::LinkError;
pub use entry::{Link, Iter as LinkIter};
pub use links::{Links, Iter, IntoIter};


/// Parse a link header with the default [`Config`].
///
/// Returns `None` if the header is absent, empty, longer than [`DEFAULT_MAX_HEADER_LENGTH`], or
/// contains no usable link.
///
/// ```
/// let links = link_header::parse(r#"<https://example.com/2>; rel="next""#).unwrap();
/// assert_eq!(links["next"].url(), "https://example.com/2");
///
/// assert!(link_header::parse("").is_none());
/// assert!(link_header::parse(None).is_none());
/// ```
pub fn parse<'a, S: Into<Option<&'a str>>>(header: S) -> Option<Links> {
    // the default config reports oversized headers as `None`
    match Config::new().parse(header) {
        Ok(links) => links,
        Err(_) => None,
    }
}

/// Parse a link header with the given [`Config`].
///
/// # Errors
///
/// Returns [`LinkError::TooLong`] if the header is too long and
/// [`Config::error_on_max_header_length`] is enabled.
#[inline]
pub fn parse_with<'a, S: Into<Option<&'a str>>>(
    header: S,
    config: &Config,
) -> Result<Option<Links>, LinkError> {
    config.parse(header)
}
