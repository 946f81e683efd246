/// Bearer-token authentication helpers for Axum
///
/// The API's auth layer uses [`authenticate`] to turn an `Authorization`
/// header into a [`TokenSubject`], then resolves the user and stores an
/// [`AuthContext`] in the request extensions for handlers to extract.
///
/// # Example
///
/// ```
/// use axum::Extension;
/// use tasklist_shared::auth::middleware::AuthContext;
///
/// async fn handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("Hello, {} ({})", auth.username, auth.user_id)
/// }
/// ```

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};

use super::credentials::Credentials;
use super::jwt::{JwtError, TokenSubject};
use crate::models::user::User;

/// Authenticated caller, added to request extensions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID
    pub user_id: i64,

    /// Username as currently stored
    pub username: String,
}

impl AuthContext {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
        }
    }
}

/// Error type for request authentication
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Missing authorization header
    #[error("Missing credentials")]
    MissingCredentials,

    /// Header present but not `Bearer <token>`
    #[error("Invalid authorization header: {0}")]
    InvalidFormat(String),

    /// Signature, issuer, subject or format check failed
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token past its expiry
    #[error("Token expired")]
    ExpiredToken,
}

impl From<JwtError> for AuthError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::Expired => AuthError::ExpiredToken,
            other => AuthError::InvalidToken(other.to_string()),
        }
    }
}

/// Extracts the raw token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingCredentials)?
        .to_str()
        .map_err(|_| AuthError::InvalidFormat("Header is not valid ASCII".to_string()))?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or_else(|| AuthError::InvalidFormat("Expected Bearer token".to_string()))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidFormat("Expected Bearer token".to_string()));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    Ok(token)
}

/// Validates the request's bearer token and returns its subject
///
/// # Errors
///
/// - `MissingCredentials` / `InvalidFormat` for a missing or malformed header
/// - `ExpiredToken` / `InvalidToken` if token verification fails
pub fn authenticate(headers: &HeaderMap, credentials: &Credentials) -> Result<TokenSubject, AuthError> {
    let token = bearer_token(headers)?;
    Ok(credentials.decode_token(token)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::Duration;

    fn credentials() -> Credentials {
        Credentials::new("test-secret-key-at-least-32-bytes-long", Duration::minutes(30))
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(&headers_with("Bearer abc.def")).unwrap(), "abc.def");
        assert_eq!(bearer_token(&headers_with("bearer abc.def")).unwrap(), "abc.def");
    }

    #[test]
    fn test_bearer_token_missing() {
        assert!(matches!(bearer_token(&HeaderMap::new()), Err(AuthError::MissingCredentials)));
        assert!(matches!(bearer_token(&headers_with("Bearer  ")), Err(AuthError::MissingCredentials)));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        assert!(matches!(
            bearer_token(&headers_with("Basic dXNlcjpwYXNz")),
            Err(AuthError::InvalidFormat(_))
        ));
        assert!(matches!(bearer_token(&headers_with("token")), Err(AuthError::InvalidFormat(_))));
    }

    #[test]
    fn test_authenticate_valid() {
        let credentials = credentials();
        let subject = TokenSubject::new(3, "kim");
        let token = credentials.create_access_token(&subject).unwrap();

        let headers = headers_with(&format!("Bearer {}", token));
        assert_eq!(authenticate(&headers, &credentials).unwrap(), subject);
    }

    #[test]
    fn test_authenticate_expired() {
        let expired = Credentials::new("test-secret-key-at-least-32-bytes-long", Duration::seconds(-3600));
        let token = expired.create_access_token(&TokenSubject::new(3, "kim")).unwrap();

        let headers = headers_with(&format!("Bearer {}", token));
        assert!(matches!(authenticate(&headers, &credentials()), Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn test_authenticate_garbage() {
        let headers = headers_with("Bearer not-a-token");
        assert!(matches!(authenticate(&headers, &credentials()), Err(AuthError::InvalidToken(_))));
    }

    #[test]
    fn test_auth_context_from_user() {
        let user = User {
            id: 8,
            username: "lee".to_string(),
            password_hash: "hash".to_string(),
            disabled: false,
        };

        let context = AuthContext::from_user(&user);
        assert_eq!(context.user_id, 8);
        assert_eq!(context.username, "lee");
    }
}
