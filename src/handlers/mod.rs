pub mod users;

use askama::Template;
use axum::response::Html;

use crate::auth::handlers::LoginTemplate;
use crate::auth::OptionalAuth;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
  pub username: String,
}

/// GET / - home for a logged-in session, login view otherwise
pub async fn index(OptionalAuth(auth): OptionalAuth) -> Html<String> {
  match auth {
    Some(auth) => {
      let template = IndexTemplate {
        username: auth.username,
      };
      Html(template.render().unwrap_or_default())
    }
    None => {
      let template = LoginTemplate {
        error_message: None,
      };
      Html(template.render().unwrap_or_default())
    }
  }
}

pub use users::{add_user_page, add_user_submit, delete_user, users_page};
