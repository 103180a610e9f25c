//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for microservices:
//! - Password hashing (Argon2id)
//! - Signed, self-contained token generation and validation (paired
//!   access/refresh tokens)
//!
//! Each service defines its own authentication traits and adapts these
//! implementations. This avoids coupling services through shared domain logic
//! while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenCodec, TokenType};
//! use chrono::{Duration, Utc};
//!
//! let codec = TokenCodec::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::minutes(15),
//!     Duration::days(30),
//! );
//! let token = codec.encode(42, TokenType::Access, Utc::now()).unwrap();
//! let claims = codec.decode(&token).unwrap();
//! assert_eq!(claims.sub, 42);
//! ```
//!
//! ## Paired Issuance
//! ```
//! use auth::TokenCodec;
//! use chrono::{Duration, Utc};
//!
//! let codec = TokenCodec::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::minutes(15),
//!     Duration::days(30),
//! );
//! let pair = codec.issue_pair(42, Utc::now()).unwrap();
//! assert_ne!(pair.access_token, pair.refresh_token);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenPair;
pub use token::TokenType;
