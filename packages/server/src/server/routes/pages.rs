use axum::{
    extract::Extension,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::server::middleware::AuthContext;
use crate::server::routes::verification::SIGN_IN_PATH;

// Markup is a bare shell; styling and chrome live with the frontend.

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Web Seek - AI Search Engine</title>
  </head>
  <body>
    <main id="home"></main>
  </body>
</html>
"#;

const SIGN_IN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Secure Login</title>
  </head>
  <body>
    <main id="login">
      <h1>Secure Login</h1>
      <form id="phone-form">
        <input type="tel" name="phoneNumber" placeholder="e.g., 14155552671">
        <button type="submit">Send Code</button>
      </form>
      <form id="code-form" hidden>
        <input type="text" name="code" placeholder="Enter 4-digit code">
        <button type="submit">Verify &amp; Login</button>
      </form>
      <p id="message"></p>
    </main>
  </body>
</html>
"#;

/// `GET /` - home page, gated by the session provider.
pub async fn home_handler(Extension(AuthContext(user)): Extension<AuthContext>) -> Response {
    if user.is_none() {
        return Redirect::to(SIGN_IN_PATH).into_response();
    }

    Html(HOME_PAGE).into_response()
}

/// `GET /sign-in` - the two-step login form shell.
pub async fn sign_in_handler() -> Html<&'static str> {
    Html(SIGN_IN_PAGE)
}
