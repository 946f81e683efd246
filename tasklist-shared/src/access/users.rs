/// Sign-up, login and current-user resolution
///
/// Login keeps the long-standing status split: an unknown username is
/// `NotFound`, a wrong password is `Unauthorized`. Both carry the same
/// message so the response body never says which one happened.

use sqlx::PgPool;

use super::{AccessError, AccessResult};
use crate::auth::{
    credentials::{AccessToken, Credentials},
    jwt::TokenSubject,
};
use crate::models::user::{CreateUser, User, UserProfile};

/// Message shared by both login failure modes
pub const LOGIN_FAILED: &str = "Incorrect username or password";

/// Registers a user, storing only the password hash
///
/// # Errors
///
/// - `Conflict` if the username is taken, including when a concurrent
///   sign-up wins the race on the unique index
pub async fn create_user(
    pool: &PgPool,
    credentials: &Credentials,
    username: &str,
    password: &str,
) -> AccessResult<UserProfile> {
    if User::find_by_username(pool, username).await?.is_some() {
        return Err(username_taken());
    }

    let password_hash = credentials.hash_password(password)?;

    let user = User::create(
        pool,
        CreateUser {
            username: username.to_string(),
            password_hash,
        },
    )
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => username_taken(),
        other => AccessError::Database(other),
    })?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(user.into())
}

/// Checks a username/password pair and issues an access token
///
/// # Errors
///
/// - `NotFound` if no user has this username
/// - `Unauthorized` if the password does not match or the account is disabled
pub async fn process_login(
    pool: &PgPool,
    credentials: &Credentials,
    username: &str,
    password: &str,
) -> AccessResult<AccessToken> {
    let user = User::find_by_username(pool, username)
        .await?
        .ok_or_else(|| AccessError::NotFound(LOGIN_FAILED.to_string()))?;

    if !credentials.verify_password(password, &user.password_hash)? {
        tracing::debug!(user_id = user.id, "Login rejected: password mismatch");
        return Err(AccessError::Unauthorized(LOGIN_FAILED.to_string()));
    }

    if user.disabled {
        tracing::debug!(user_id = user.id, "Login rejected: account disabled");
        return Err(AccessError::Unauthorized(LOGIN_FAILED.to_string()));
    }

    let token = credentials.create_access_token(&TokenSubject::new(user.id, &user.username))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(AccessToken::bearer(token))
}

/// Loads the user a decoded token refers to
///
/// # Errors
///
/// - `Unauthorized` if the user no longer exists or is disabled
pub async fn current_user(pool: &PgPool, subject: &TokenSubject) -> AccessResult<User> {
    match User::find_by_id(pool, subject.user_id).await? {
        Some(user) if !user.disabled => Ok(user),
        _ => Err(AccessError::Unauthorized(
            "Could not validate credentials".to_string(),
        )),
    }
}

fn username_taken() -> AccessError {
    AccessError::Conflict("Username already registered".to_string())
}
