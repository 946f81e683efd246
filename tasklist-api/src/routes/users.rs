/// User endpoints
///
/// - `POST /users` - Sign up
/// - `POST /users/login` - Login with a JSON body
/// - `POST /docslogin` - Login with a form body (interactive docs clients)
/// - `GET /users/profile` - The authenticated user

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Extension, Form, Json};
use serde::Deserialize;
use tasklist_shared::{
    access,
    auth::{credentials::AccessToken, middleware::AuthContext},
    models::user::UserProfile,
};
use validator::Validate;

/// Sign-up request
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Unique username
    #[validate(length(min = 1, max = 100, message = "Username must be 1-100 characters"))]
    pub username: String,

    /// Plain-text password, hashed before storage
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Login request, accepted as JSON or as a form
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// { "username": "alice", "password": "correct horse" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 1, "username": "alice" }
/// ```
///
/// # Errors
///
/// - `409 Conflict`: Username already registered
/// - `422 Unprocessable Entity`: Validation failed
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> ApiResult<Json<UserProfile>> {
    req.validate()?;

    let profile =
        access::users::create_user(&state.db, &state.credentials, &req.username, &req.password)
            .await?;

    Ok(Json(profile))
}

/// Login endpoint
///
/// # Endpoint
///
/// ```text
/// POST /users/login
/// Content-Type: application/json
///
/// { "username": "alice", "password": "correct horse" }
/// ```
///
/// # Response
///
/// ```json
/// { "access_token": "eyJ...", "token_type": "bearer" }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Wrong password or disabled account
/// - `404 Not Found`: Unknown username
/// - `422 Unprocessable Entity`: Validation failed
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AccessToken>> {
    authenticate_login(&state, req).await
}

/// Form login, same semantics as [`login`]
///
/// ```text
/// POST /docslogin
/// Content-Type: application/x-www-form-urlencoded
///
/// username=alice&password=correct+horse
/// ```
pub async fn login_with_form(
    State(state): State<AppState>,
    Form(req): Form<LoginRequest>,
) -> ApiResult<Json<AccessToken>> {
    authenticate_login(&state, req).await
}

async fn authenticate_login(state: &AppState, req: LoginRequest) -> ApiResult<Json<AccessToken>> {
    req.validate()?;

    let token =
        access::users::process_login(&state.db, &state.credentials, &req.username, &req.password)
            .await?;

    Ok(Json(token))
}

/// Returns the authenticated user
///
/// ```text
/// GET /users/profile
/// Authorization: Bearer eyJ...
/// ```
pub async fn profile(Extension(auth): Extension<AuthContext>) -> Json<UserProfile> {
    Json(UserProfile {
        id: auth.user_id,
        username: auth.username,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_validation() {
        let ok = SignUpRequest {
            username: "alice".to_string(),
            password: "long enough".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = SignUpRequest {
            username: "alice".to_string(),
            password: "short".to_string(),
        };
        let errors = short.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));

        let long_name = SignUpRequest {
            username: "a".repeat(101),
            password: "long enough".to_string(),
        };
        assert!(long_name.validate().is_err());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let req = LoginRequest {
            username: String::new(),
            password: String::new(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[tokio::test]
    async fn test_profile_echoes_context() {
        let Json(profile) = profile(Extension(AuthContext {
            user_id: 7,
            username: "alice".to_string(),
        }))
        .await;

        assert_eq!(profile.id, 7);
        assert_eq!(profile.username, "alice");
    }
}
