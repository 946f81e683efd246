/// Credential capability: hash, verify, issue, decode
///
/// `Credentials` owns the token signing secret and the token lifetime. The
/// rest of the system only ever holds a `Credentials` value and calls its four
/// operations; the secret itself is never handed out.
///
/// # Example
///
/// ```
/// use chrono::Duration;
/// use tasklist_shared::auth::credentials::Credentials;
/// use tasklist_shared::auth::jwt::TokenSubject;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("your-secret-key-at-least-32-bytes", Duration::minutes(30));
///
/// let hash = credentials.hash_password("hunter22")?;
/// assert!(credentials.verify_password("hunter22", &hash)?);
///
/// let token = credentials.create_access_token(&TokenSubject::new(1, "alice"))?;
/// assert_eq!(credentials.decode_token(&token)?.user_id, 1);
/// # Ok(())
/// # }
/// ```

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::jwt::{self, Claims, JwtError, TokenSubject};
use super::password::{self, PasswordError};

/// Token type reported to clients alongside the access token
pub const TOKEN_TYPE: &str = "bearer";

/// Login result handed back to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
        }
    }
}

/// Password hashing and bearer-token issuance bound to one signing secret
#[derive(Clone)]
pub struct Credentials {
    secret: String,
    access_token_ttl: Duration,
}

impl Credentials {
    /// Creates a credential service signing with `secret`; tokens live for `access_token_ttl`
    pub fn new(secret: impl Into<String>, access_token_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            access_token_ttl,
        }
    }

    pub fn hash_password(&self, plain: &str) -> Result<String, PasswordError> {
        password::hash_password(plain)
    }

    pub fn verify_password(&self, plain: &str, hash: &str) -> Result<bool, PasswordError> {
        password::verify_password(plain, hash)
    }

    /// Issues a signed access token for `subject`
    pub fn create_access_token(&self, subject: &TokenSubject) -> Result<String, JwtError> {
        let claims = Claims::new(subject, self.access_token_ttl);
        jwt::create_token(&claims, &self.secret)
    }

    /// Verifies signature, issuer and expiry, then returns the token's subject
    ///
    /// # Errors
    ///
    /// - `JwtError::Expired` if the token is past its expiry
    /// - `JwtError::Invalid` / `JwtError::InvalidSubject` otherwise
    pub fn decode_token(&self, token: &str) -> Result<TokenSubject, JwtError> {
        jwt::validate_token(token, &self.secret)?.subject()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("secret", &"<redacted>")
            .field("access_token_ttl", &self.access_token_ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("test-secret-key-at-least-32-bytes-long", Duration::minutes(30))
    }

    #[test]
    fn test_issue_and_decode() {
        let credentials = credentials();
        let subject = TokenSubject::new(12, "henry");

        let token = credentials.create_access_token(&subject).unwrap();
        assert_eq!(credentials.decode_token(&token).unwrap(), subject);
    }

    #[test]
    fn test_decode_expired() {
        let credentials = Credentials::new("test-secret-key-at-least-32-bytes-long", Duration::seconds(-3600));
        let token = credentials.create_access_token(&TokenSubject::new(1, "ivy")).unwrap();

        assert!(matches!(credentials.decode_token(&token), Err(JwtError::Expired)));
    }

    #[test]
    fn test_decode_from_other_secret() {
        let other = Credentials::new("another-secret-key-at-least-32-bytes", Duration::minutes(30));
        let token = other.create_access_token(&TokenSubject::new(1, "jack")).unwrap();

        assert!(matches!(credentials().decode_token(&token), Err(JwtError::Invalid(_))));
    }

    #[test]
    fn test_password_capability() {
        let credentials = credentials();
        let hash = credentials.hash_password("s3cret-pass").unwrap();

        assert!(credentials.verify_password("s3cret-pass", &hash).unwrap());
        assert!(!credentials.verify_password("other-pass", &hash).unwrap());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", credentials());
        assert!(!rendered.contains("test-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_access_token_shape() {
        let token = AccessToken::bearer("abc".to_string());
        let json = serde_json::to_value(&token).unwrap();

        assert_eq!(json["access_token"], "abc");
        assert_eq!(json["token_type"], "bearer");
    }
}
