//! Callback-fragment parsing
//!
//! The provider returns credentials in the URL fragment
//! (`/auth/callback#access_token=…&token_type=bearer&expires_in=3600`).
//! Parsing is one-shot: the fragment is read into [`CallbackTokens`] and the
//! raw string is dropped; callers must never persist it. A fragment without
//! an `access_token` is not an error — the callback route is also reachable
//! by direct navigation — so [`parse`] returns `None` and the caller
//! no-ops.

use serde::{Deserialize, Serialize};

/// Credentials extracted from a provider callback fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackTokens {
    pub access_token: String,
    /// Always "bearer" from the hosted service; kept for completeness
    pub token_type: String,
    pub expires_in: Option<i64>,
    pub refresh_token: Option<String>,
}

/// Parse a callback fragment into [`CallbackTokens`]
///
/// Accepts either the bare fragment (`access_token=…&…`) or one with the
/// leading `#`. Returns `None` when no `access_token` parameter is present.
#[must_use]
pub fn parse(fragment: &str) -> Option<CallbackTokens> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

    let mut access_token = None;
    let mut token_type = None;
    let mut expires_in = None;
    let mut refresh_token = None;

    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(value).map(|v| v.into_owned()).unwrap_or_default();
        match key {
            "access_token" if !value.is_empty() => access_token = Some(value),
            "token_type" => token_type = Some(value),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            "refresh_token" if !value.is_empty() => refresh_token = Some(value),
            _ => {}
        }
    }

    access_token.map(|access_token| CallbackTokens {
        access_token,
        token_type: token_type.unwrap_or_else(|| "bearer".to_string()),
        expires_in,
        refresh_token,
    })
}
