//! Login and logout handlers.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use super::middleware::SESSION_COOKIE_NAME;
use crate::config;
use crate::db::{self, LogOnError};
use crate::session::generate_session_id;
use crate::state::AppState;

/// Session duration in hours (1 week)
const SESSION_DURATION_HOURS: i64 = 24 * 7;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error_message: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

fn login_view(message: &str) -> Html<String> {
    let template = LoginTemplate {
        error_message: Some(message.to_string()),
    };
    Html(template.render().unwrap_or_default())
}

/// GET /login - Show login page
pub async fn login_page() -> Html<String> {
    let template = LoginTemplate {
        error_message: None,
    };
    Html(template.render().unwrap_or_default())
}

/// POST /login - Process login
///
/// One message for every failure: whether the username was unknown, the
/// password wrong, or the store unreachable is not distinguishable from
/// the response.
pub async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    let conn = match state.db.lock() {
        Ok(conn) => conn,
        Err(_) => {
            tracing::error!("Database lock poisoned during login");
            return (jar, login_view("Invalid login")).into_response();
        }
    };

    // Occasionally sweep expired sessions while we hold the connection
    if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
        db::cleanup_expired_sessions(&conn).log_warn("Failed to clean up expired sessions");
    }

    match db::credentials_match(&conn, &form.username, &form.password) {
        Ok(true) => {}
        Ok(false) => {
            return (jar, login_view("Invalid login")).into_response();
        }
        Err(e) => {
            tracing::error!("Login query failed: {}", e);
            return (jar, login_view("Invalid login")).into_response();
        }
    }

    // Create session
    let session_id = generate_session_id();
    if let Err(e) = db::create_session(&conn, &session_id, &form.username, SESSION_DURATION_HOURS) {
        tracing::error!("Failed to create session: {}", e);
        return (jar, login_view("Invalid login")).into_response();
    }
    drop(conn);

    // Set session cookie
    let session_cookie = Cookie::build((SESSION_COOKIE_NAME, session_id))
        .path("/")
        .http_only(true)
        .secure(false) // Set to true in production with HTTPS
        .max_age(time::Duration::hours(SESSION_DURATION_HOURS))
        .build();

    (jar.add(session_cookie), Redirect::to("/")).into_response()
}

/// GET /logout - Destroy the session and go home
///
/// Idempotent: an anonymous request lands here without error, and a
/// failed deletion is logged but never surfaced.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(session_cookie) = jar.get(SESSION_COOKIE_NAME) {
        let session_id = session_cookie.value();
        if let Ok(conn) = state.db.lock() {
            db::delete_session(&conn, session_id)
                .log_warn("Failed to delete session during logout");
        }
    }

    // Remove session cookie
    let session_cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .max_age(time::Duration::seconds(0))
        .build();

    (jar.remove(session_cookie), Redirect::to("/"))
}
