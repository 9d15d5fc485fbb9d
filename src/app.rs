//! Router table.
//!
//! Open routes: /, /login, /logout. Everything else declares
//! [`crate::auth::AuthContext`] and requires a logged-in session.

use axum::http::{header::CONTENT_SECURITY_POLICY, HeaderValue};
use axum::{routing::get, routing::post, Router};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{auth, config, handlers};

pub fn router(state: AppState) -> Router {
  let upload_root = state.upload_root.clone();

  Router::new()
    .route("/", get(handlers::index))
    .route("/login", get(auth::login_page).post(auth::login_submit))
    .route("/logout", get(auth::logout))
    .route("/users", get(handlers::users_page))
    .route("/addUser", get(handlers::add_user_page).post(handlers::add_user_submit))
    .route("/deleteUser/{id}", post(handlers::delete_user))
    .nest_service("/images", ServeDir::new(upload_root))
    .nest_service("/static", ServeDir::new("static"))
    .layer(SetResponseHeaderLayer::if_not_present(
      CONTENT_SECURITY_POLICY,
      HeaderValue::from_static(config::CSP_POLICY),
    ))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
