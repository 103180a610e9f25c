use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenType;
use super::errors::TokenError;

/// Encoder/decoder for signed, self-contained bearer tokens.
///
/// Tokens are stateless: no server-side session store, no revocation list.
/// Validity is determined purely by signature and expiry at verification
/// time. Uses HS256 (HMAC with SHA-256).
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

/// Access/refresh token pair issued together on login and on refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenCodec {
    /// Create a new codec with a signing secret and per-type lifetimes.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `access_ttl` - Lifetime of access tokens (typically minutes)
    /// * `refresh_ttl` - Lifetime of refresh tokens (typically weeks)
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            access_ttl,
            refresh_ttl,
        }
    }

    /// Encode a signed token for `subject`.
    ///
    /// The payload carries the subject id, the token type, `iat = now`, and
    /// `exp = now + TTL(token_type)`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(
        &self,
        subject: i64,
        token_type: TokenType,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject, token_type, now, self.ttl_for(token_type));
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a token.
    ///
    /// Signature and structure are verified first; only then is expiry
    /// checked against wall-clock time. Clock skew is not compensated.
    ///
    /// # Errors
    /// * `Invalid` - Bad signature, malformed structure, or wrong signing key
    /// * `Expired` - Valid signature but the expiry timestamp has passed
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })?;

        Ok(token_data.claims)
    }

    /// Issue a fresh access/refresh pair for `subject`.
    ///
    /// The two tokens share no persisted linkage; each stands on its own
    /// signature and expiry.
    pub fn issue_pair(&self, subject: i64, now: DateTime<Utc>) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.encode(subject, TokenType::Access, now)?,
            refresh_token: self.encode(subject, TokenType::Refresh, now)?,
        })
    }

    fn ttl_for(&self, token_type: TokenType) -> Duration {
        match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        }
    }
}
