//! Authentication extractors.
//!
//! Protection is declared in the router table by handler signature: a
//! handler that takes [`AuthContext`] requires a logged-in session, one
//! that doesn't is open. New routes are therefore protected (or not) at
//! the point they are written, never by a path list that can go stale.

use askama::Template;
use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use super::handlers::LoginTemplate;
use crate::db;
use crate::state::AppState;

pub const SESSION_COOKIE_NAME: &str = "roster_session";

/// Authenticated request context.
/// Add this as a handler parameter to require authentication.
/// Unauthenticated requests get the login view back instead.
#[derive(Clone)]
pub struct AuthContext {
    pub username: String,
}

/// The login view shown in place of any protected page
fn login_rejection() -> Response {
    let template = LoginTemplate {
        error_message: Some("Please log in to access this page".to_string()),
    };
    Html(template.render().unwrap_or_default()).into_response()
}

impl FromRequestParts<AppState> for AuthContext {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract cookies
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| login_rejection())?;

        // Get session cookie
        let session_id = jar
            .get(SESSION_COOKIE_NAME)
            .map(|c| c.value().to_string())
            .ok_or_else(login_rejection)?;

        // Validate session
        let conn = state.db.lock().map_err(|_| {
            tracing::error!("Database lock poisoned during session lookup");
            login_rejection()
        })?;

        let username = db::get_session_username(&conn, &session_id)
            .map_err(|e| {
                tracing::error!("Session lookup failed: {}", e);
                login_rejection()
            })?
            .ok_or_else(login_rejection)?;

        Ok(AuthContext { username })
    }
}

/// Optional authentication extractor.
/// Returns Some(AuthContext) if authenticated, None otherwise.
/// Use for pages that work both with and without authentication.
pub struct OptionalAuth(pub Option<AuthContext>);

impl FromRequestParts<AppState> for OptionalAuth {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match AuthContext::from_request_parts(parts, state).await {
            Ok(auth) => Ok(OptionalAuth(Some(auth))),
            Err(_) => Ok(OptionalAuth(None)),
        }
    }
}
