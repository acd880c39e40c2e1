use std::num::NonZeroUsize;

use super::{Links, LinkError, guard};
use crate::common::ByteStr;

/// Maximum accepted header length, in bytes, when none is configured.
pub const DEFAULT_MAX_HEADER_LENGTH: usize = 2000;

/// Environment variable overriding [`Config::max_header_length`].
pub const ENV_MAX_HEADER_LENGTH: &str = "LINK_HEADER_MAXLEN";

/// Environment variable enabling [`Config::error_on_max_header_length`] when set.
pub const ENV_ERROR_ON_MAX_HEADER_LENGTH: &str = "LINK_HEADER_ERROR_ON_MAXLEN";

/// Link header parser configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum accepted header length in bytes.
    ///
    /// Input longer than this is never scanned. `None` means [`DEFAULT_MAX_HEADER_LENGTH`].
    pub max_header_length: Option<NonZeroUsize>,
    /// Whether a header longer than the maximum length is an error.
    ///
    /// When disabled, such header is reported the same way as an absent header.
    pub error_on_max_header_length: bool,
    /// Whether to decompose the query string of each link target into entry parameters.
    ///
    /// Explicit link parameters take precedence over query parameters with the same name.
    pub expand_query: bool,
}

impl Config {
    /// Creates new [`Config`] with default values.
    pub const fn new() -> Self {
        Self {
            max_header_length: None,
            error_on_max_header_length: false,
            expand_query: true,
        }
    }

    /// Creates new [`Config`] with defaults overridden by the process environment.
    ///
    /// - [`ENV_MAX_HEADER_LENGTH`], a positive integer, otherwise ignored
    /// - [`ENV_ERROR_ON_MAX_HEADER_LENGTH`], enables the error mode when set to any value
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Self {
        let mut config = Self::new();
        if let Some(max) = var(ENV_MAX_HEADER_LENGTH) {
            config.max_header_length = max.trim().parse().ok();
        }
        if var(ENV_ERROR_ON_MAX_HEADER_LENGTH).is_some() {
            config.error_on_max_header_length = true;
        }
        config
    }

    /// Set the maximum accepted header length, zero resets to [`DEFAULT_MAX_HEADER_LENGTH`].
    pub fn max_header_length(mut self, max: usize) -> Self {
        self.max_header_length = NonZeroUsize::new(max);
        self
    }

    /// Set whether a header longer than the maximum length is an error.
    pub fn error_on_max_header_length(mut self, enabled: bool) -> Self {
        self.error_on_max_header_length = enabled;
        self
    }

    /// Set whether to decompose the query string of each link target.
    pub fn expand_query(mut self, enabled: bool) -> Self {
        self.expand_query = enabled;
        self
    }

    /// Returns the maximum header length in effect.
    pub fn effective_max_header_length(&self) -> usize {
        match self.max_header_length {
            Some(max) => max.get(),
            None => DEFAULT_MAX_HEADER_LENGTH,
        }
    }

    /// Parse a link header.
    ///
    /// Returns `Ok(None)` if the header is absent, empty, contains no usable link, or is too long
    /// while [`error_on_max_header_length`] is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::TooLong`] if the header is too long and
    /// [`error_on_max_header_length`] is enabled.
    ///
    /// [`error_on_max_header_length`]: Config::error_on_max_header_length
    pub fn parse<'a, S: Into<Option<&'a str>>>(&self, header: S) -> Result<Option<Links>, LinkError> {
        let Some(header) = header.into() else {
            return Ok(None);
        };
        if !guard::check(header.len(), self)? {
            return Ok(None);
        }
        Ok(Links::build(&ByteStr::copy_from_str(header), self))
    }

    /// Parse a link header without copying it.
    ///
    /// Every name and value in the result that is not percent decoded shares the buffer of
    /// `header`.
    ///
    /// # Errors
    ///
    /// See [`Config::parse`].
    pub fn parse_shared(&self, header: ByteStr) -> Result<Option<Links>, LinkError> {
        if !guard::check(header.len(), self)? {
            return Ok(None);
        }
        Ok(Links::build(&header, self))
    }
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
