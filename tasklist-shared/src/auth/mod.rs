/// Authentication and authorization utilities
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: HS256 access tokens carrying `"<id>:<username>"` subjects
/// - [`credentials`]: The hash / verify / issue / decode capability
/// - [`middleware`]: Bearer header parsing and the request `AuthContext`
/// - [`authorization`]: Ownership guard for lists and tasks
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
/// let token = credentials.create_access_token(&TokenSubject::new(1, "alice"))?;
/// let subject = credentials.decode_token(&token)?;
/// assert_eq!(subject.username, "alice");
/// # Ok(())
/// # }
/// ```

pub mod authorization;
pub mod credentials;
pub mod jwt;
pub mod middleware;
pub mod password;
