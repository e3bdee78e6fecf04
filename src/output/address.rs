//! Address builder.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use super::OutputError;

/// Characters left unescaped in a credential, as URI component encoding does.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the destination address from its parts.
///
/// Without credentials the result is the literal concatenation
/// `protocol + address` and no URL parsing takes place. Otherwise the
/// concatenation is parsed as a URL and each non-empty credential is
/// percent-encoded into its userinfo. Parsing normalizes the URL, so a
/// bare host gains a trailing `/`.
///
/// # Errors
///
/// Returns [`OutputError::MalformedAddress`] if credentials are set and
/// the concatenation is not a URL that can carry them.
pub fn build_address(
    protocol: &str,
    address: &str,
    username: &str,
    password: &str,
) -> Result<String, OutputError> {
    let base = format!("{protocol}{address}");

    if username.is_empty() && password.is_empty() {
        return Ok(base);
    }

    let mut url = Url::parse(&base).map_err(|e| OutputError::MalformedAddress {
        address: base.clone(),
        reason: e.to_string(),
    })?;

    if !username.is_empty() {
        let encoded = utf8_percent_encode(username, COMPONENT).to_string();
        url.set_username(&encoded)
            .map_err(|()| cannot_carry_credentials(&base))?;
    }

    if !password.is_empty() {
        let encoded = utf8_percent_encode(password, COMPONENT).to_string();
        url.set_password(Some(encoded.as_str()))
            .map_err(|()| cannot_carry_credentials(&base))?;
    }

    Ok(url.into())
}

fn cannot_carry_credentials(base: &str) -> OutputError {
    OutputError::MalformedAddress {
        address: base.to_string(),
        reason: "URL cannot carry credentials".to_string(),
    }
}
