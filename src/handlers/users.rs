//! User roster handlers: list, add (with optional profile image), delete.

use askama::Template;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::auth::AuthContext;
use crate::db::{self, User};
use crate::state::AppState;
use crate::uploads;

#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersTemplate {
  pub users: Vec<User>,
  pub error_message: Option<String>,
}

#[derive(Template)]
#[template(path = "add_user.html")]
pub struct AddUserTemplate {
  pub error_message: Option<String>,
}

/// GET /users - the full roster, in store order
///
/// A failed read degrades to an empty list with the underlying error text
/// in the page. That leak is intentional: this is an internal tool and
/// the operator reading the page is the person who will fix the store.
pub async fn users_page(_auth: AuthContext, State(state): State<AppState>) -> Html<String> {
  let users = match state.db.lock() {
    Ok(conn) => db::list_users(&conn).map_err(|e| e.to_string()),
    Err(_) => Err("database lock poisoned".to_string()),
  };

  let template = match users {
    Ok(users) => {
      tracing::debug!("Retrieved {} users", users.len());
      UsersTemplate {
        users,
        error_message: None,
      }
    }
    Err(e) => {
      tracing::error!("Users query failed: {}", e);
      UsersTemplate {
        users: Vec::new(),
        error_message: Some(format!(
          "Database error: {}. Please check if the 'users' table exists.",
          e
        )),
      }
    }
  };

  Html(template.render().unwrap_or_default())
}

/// GET /addUser - empty form
pub async fn add_user_page(_auth: AuthContext) -> Html<String> {
  let template = AddUserTemplate {
    error_message: None,
  };
  Html(template.render().unwrap_or_default())
}

fn add_user_form_error(status: StatusCode, message: &str) -> Response {
  let template = AddUserTemplate {
    error_message: Some(message.to_string()),
  };
  (status, Html(template.render().unwrap_or_default())).into_response()
}

/// POST /addUser - multipart form: username, password, optional profileImage
pub async fn add_user_submit(
  _auth: AuthContext,
  State(state): State<AppState>,
  mut multipart: Multipart,
) -> Response {
  let mut username = String::new();
  let mut password = String::new();
  let mut profile_image: Option<String> = None;

  // The image is written as soon as its field arrives; a validation
  // failure below does not remove it from disk.
  while let Ok(Some(field)) = multipart.next_field().await {
    let name = field.name().unwrap_or_default().to_string();
    match name.as_str() {
      "username" => username = field.text().await.unwrap_or_default(),
      "password" => password = field.text().await.unwrap_or_default(),
      "profileImage" => {
        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
          // Browsers send an empty file part when no file was chosen
          continue;
        }
        let bytes = match field.bytes().await {
          Ok(bytes) => bytes,
          Err(e) => {
            tracing::warn!("Failed to read profile image upload: {}", e);
            continue;
          }
        };
        match uploads::save_profile_image(&state.upload_root, &filename, &bytes) {
          Ok(path) => profile_image = Some(path),
          Err(e) => tracing::error!("Failed to store profile image {}: {}", filename, e),
        }
      }
      _ => {}
    }
  }

  if username.is_empty() || password.is_empty() {
    return add_user_form_error(
      StatusCode::BAD_REQUEST,
      "Username and password are required.",
    );
  }

  let conn = match state.db.lock() {
    Ok(conn) => conn,
    Err(_) => {
      tracing::error!("Database lock poisoned during user insert");
      return add_user_form_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Unable to save user. Please try again.",
      );
    }
  };

  match db::insert_user(&conn, &username, &password, profile_image.as_deref()) {
    Ok(_) => Redirect::to("/users").into_response(),
    Err(e) => {
      tracing::error!("Error inserting user: {}", e);
      add_user_form_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Unable to save user. Please try again.",
      )
    }
  }
}

/// POST /deleteUser/{id} - remove at most one record
///
/// Deleting an id that no longer exists is not an error; both outcomes
/// land back on the roster.
pub async fn delete_user(
  _auth: AuthContext,
  State(state): State<AppState>,
  Path(id): Path<i64>,
) -> Response {
  let result = match state.db.lock() {
    Ok(conn) => db::delete_user(&conn, id).map_err(|e| e.to_string()),
    Err(_) => Err("database lock poisoned".to_string()),
  };

  match result {
    Ok(_) => Redirect::to("/users").into_response(),
    Err(e) => {
      tracing::error!("Error deleting user {}: {}", id, e);
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Unable to delete user. Please try again.",
      )
        .into_response()
    }
  }
}
