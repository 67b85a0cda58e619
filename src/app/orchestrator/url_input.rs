// SPDX-License-Identifier: MPL-2.0
//! Normalization and validation of the URL typed by the user.

use crate::error::UrlError;
use url::Url;

/// Scheme prepended when the input names none.
pub const DEFAULT_SCHEME: &str = "https";

/// Normalizes `input` into an absolute URL.
///
/// The input is trimmed and, when it carries no `scheme://` prefix, given
/// the default scheme. The result must parse as an absolute URL with a
/// host. On success the normalized text is returned as typed, without the
/// trailing slash `url` would add, so it can be echoed back into the field.
///
/// # Errors
///
/// Returns [`UrlError::Empty`] for blank input and [`UrlError::Malformed`]
/// when the normalized text is not a URL with a host.
pub fn normalize(input: &str) -> Result<String, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("{DEFAULT_SCHEME}://{trimmed}")
    };

    let malformed = |reason: String| UrlError::Malformed {
        input: trimmed.to_owned(),
        reason,
    };

    let parsed = Url::parse(&candidate).map_err(|err| malformed(err.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(malformed("missing host".to_owned()));
    }

    Ok(candidate)
}
