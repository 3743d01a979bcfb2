//! Handlers for the `/auth` resource.
//!
//! Refresh tokens are opaque and single-use: each refresh revokes the
//! presented session and opens a new one in the same transaction, so a
//! replayed token is rejected.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use precast_core::error::CoreError;
use precast_core::roles::Role;
use precast_core::types::DbId;
use precast_db::models::session::NewSession;
use precast_db::models::user::User;
use precast_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Consecutive failed logins before the account is locked.
const MAX_FAILED_ATTEMPTS: i32 = 5;

const LOCK_DURATION_MINS: i32 = 15;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token pair plus the caller's identity.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until `access_token` expires.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl UserInfo {
    fn new(user: &User, role: Role) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role,
        }
    }
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    ensure_active(&user)?;
    if user.is_locked_at(Utc::now()) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is temporarily locked. Try again later.".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        let failed = UserRepo::record_failed_login(
            &state.pool,
            user.id,
            MAX_FAILED_ATTEMPTS,
            LOCK_DURATION_MINS,
        )
        .await?;
        if let Some(until) = failed.locked_until {
            tracing::warn!(
                user_id = user.id,
                failures = failed.failed_login_count,
                %until,
                "Account locked after failed logins",
            );
        }
        return Err(invalid_credentials());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;
    let role = user_role(&user)?;

    let (refresh_token, session) = new_session(&state, user.id);
    SessionRepo::open(&state.pool, &session).await?;

    tracing::info!(user_id = user.id, %role, "User logged in");
    Ok(Json(auth_response(&state, &user, role, refresh_token)?))
}

/// POST /api/v1/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let presented = SessionRepo::find_live(&state.pool, &hash_refresh_token(&input.refresh_token))
        .await?
        .ok_or_else(invalid_refresh_token)?;

    let user = UserRepo::find_by_id(&state.pool, presented.user_id)
        .await?
        .ok_or_else(invalid_refresh_token)?;
    ensure_active(&user)?;
    let role = user_role(&user)?;

    let (refresh_token, next) = new_session(&state, user.id);
    if SessionRepo::rotate(&state.pool, presented.id, &next)
        .await?
        .is_none()
    {
        // Lost a race with another refresh of the same token.
        tracing::warn!(user_id = user.id, session_id = presented.id, "Refresh token reused");
        return Err(invalid_refresh_token());
    }

    Ok(Json(auth_response(&state, &user, role, refresh_token)?))
}

/// POST /api/v1/auth/logout
///
/// Revokes every session of the caller.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::info!(user_id = auth_user.user_id, revoked, "User logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
///
/// The caller's current account. The role comes from the database, so a
/// role change shows up here before the access token expires.
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<UserInfo>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    ensure_active(&user)?;
    let role = user_role(&user)?;

    Ok(Json(DataResponse {
        data: UserInfo::new(&user, role),
    }))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

fn invalid_refresh_token() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid or expired refresh token".into(),
    ))
}

fn ensure_active(user: &User) -> AppResult<()> {
    if user.is_active {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )))
    }
}

fn user_role(user: &User) -> AppResult<Role> {
    user.role().ok_or_else(|| {
        AppError::InternalError(format!(
            "User {} has unknown role '{}'",
            user.id, user.role_name
        ))
    })
}

/// A fresh refresh token and the session row that will store its hash.
fn new_session(state: &AppState, user_id: DbId) -> (String, NewSession) {
    let (plaintext, refresh_token_hash) = generate_refresh_token();
    let expires_at = Utc::now() + Duration::days(state.config.jwt.refresh_token_expiry_days);
    (
        plaintext,
        NewSession {
            user_id,
            refresh_token_hash,
            expires_at,
        },
    )
}

fn auth_response(
    state: &AppState,
    user: &User,
    role: Role,
    refresh_token: String,
) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user.id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo::new(user, role),
    })
}
