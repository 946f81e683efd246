/// Bearer token issuance and validation
///
/// Access tokens are JWTs signed with HS256 using a server-held secret. The
/// subject claim carries both the user id and the username as
/// `"<id>:<username>"`, so a request can be attributed to a user without a
/// password round-trip.
///
/// # Claims
///
/// - `sub`: `"<user_id>:<username>"`
/// - `iss`: always `"tasklist"`
/// - `iat`: issued at (Unix timestamp)
/// - `exp`: expiration (Unix timestamp)
///
/// # Example
///
/// ```
/// use chrono::Duration;
/// use tasklist_shared::auth::jwt::{create_token, validate_token, Claims, TokenSubject};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let subject = TokenSubject::new(7, "alice");
/// let claims = Claims::new(&subject, Duration::minutes(30));
/// let token = create_token(&claims, "your-secret-key-at-least-32-bytes")?;
///
/// let validated = validate_token(&token, "your-secret-key-at-least-32-bytes")?;
/// assert_eq!(validated.subject()?, subject);
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Issuer written into and required from every token
pub const ISSUER: &str = "tasklist";

/// Error type for JWT operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Signature, issuer or format check failed
    #[error("Invalid token: {0}")]
    Invalid(String),

    /// Token is past its expiry
    #[error("Token has expired")]
    Expired,

    /// Subject claim is not `<id>:<username>`
    #[error("Invalid token subject: {0}")]
    InvalidSubject(String),
}

/// Identity carried in the `sub` claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSubject {
    /// User ID
    pub user_id: i64,

    /// Username at the time the token was issued
    pub username: String,
}

impl TokenSubject {
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}

impl fmt::Display for TokenSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.user_id, self.username)
    }
}

impl FromStr for TokenSubject {
    type Err = JwtError;

    // The id never contains ':', so the first separator splits id from username.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, username) = s
            .split_once(':')
            .ok_or_else(|| JwtError::InvalidSubject("missing separator".to_string()))?;

        let user_id = id
            .parse::<i64>()
            .map_err(|_| JwtError::InvalidSubject("user id is not numeric".to_string()))?;

        if username.is_empty() {
            return Err(JwtError::InvalidSubject("empty username".to_string()));
        }

        Ok(Self::new(user_id, username))
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - `"<user_id>:<username>"`
    pub sub: String,

    /// Issuer - always "tasklist"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for `subject` that expire `expires_in` from now
    ///
    /// A negative duration produces an already-expired token, which is
    /// useful in tests.
    pub fn new(subject: &TokenSubject, expires_in: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + expires_in;

        Self {
            sub: subject.to_string(),
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Parses the subject claim back into a user identity
    pub fn subject(&self) -> Result<TokenSubject, JwtError> {
        self.sub.parse()
    }

    /// Checks if token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs claims into a compact JWT using HS256
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a JWT and returns its claims
///
/// Verifies the HS256 signature, the expiry and the issuer.
///
/// # Errors
///
/// - `JwtError::Expired` if the token is past `exp`
/// - `JwtError::Invalid` for a bad signature, wrong issuer or malformed token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        _ => JwtError::Invalid(e.to_string()),
    })?;

    Ok(token_data.claims)
}
