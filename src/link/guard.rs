use super::{Config, LinkError};
use crate::log::warning;

/// Check the header length before any scanning.
///
/// Returns `Ok(false)` when there is nothing to parse, either an empty header or a header that is
/// too long while [`Config::error_on_max_header_length`] is disabled.
pub(crate) fn check(len: usize, config: &Config) -> Result<bool, LinkError> {
    if len == 0 {
        return Ok(false);
    }

    let max = config.effective_max_header_length();
    if len <= max {
        return Ok(true);
    }

    warning!("link header of {len} bytes exceeds maximum of {max} bytes");

    if config.error_on_max_header_length {
        Err(LinkError::TooLong { len, max })
    } else {
        Ok(false)
    }
}
