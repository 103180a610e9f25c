use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Discriminates the two credentials issued per successful authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived credential authorizing immediate API calls.
    Access,
    /// Long-lived credential used solely to obtain a new token pair.
    Refresh,
}

/// Claims carried by a signed token.
///
/// Self-describing: subject, token type, and the issue/expiry window are all
/// embedded in the payload, so verification needs no server-side lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (numeric user id the token asserts identity for)
    pub sub: i64,

    /// Token type (access or refresh)
    pub token_type: TokenType,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for `subject` issued at `issued_at`, expiring after
    /// `ttl`. A non-positive `ttl` produces claims that are already expired.
    pub fn new(
        subject: i64,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub: subject,
            token_type,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }
}
