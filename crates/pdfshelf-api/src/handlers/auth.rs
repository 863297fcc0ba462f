//! Login and logout.

use crate::auth::SessionAuth;
use crate::state::AppState;
use crate::utils::redirect::found;
use crate::views;
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use pdfshelf_core::constants::SESSION_COOKIE_NAME;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

pub async fn login_page(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let cookie = jar.get(SESSION_COOKIE_NAME).map(|c| c.value());
    if state.auth.is_valid_session(cookie) {
        return found("/");
    }
    Html(views::login_page(None)).into_response()
}

/// Check the submitted password. A missing or unreadable form counts as a wrong password.
#[tracing::instrument(skip_all, fields(operation = "login"))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    let password = match form {
        Ok(Form(form)) => form.password,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable login form");
            String::new()
        }
    };

    if !state.auth.verify_password(&password) {
        tracing::warn!("Login failed: invalid password");
        return (
            StatusCode::UNAUTHORIZED,
            Html(views::login_page(Some("Invalid password"))),
        )
            .into_response();
    }

    tracing::info!("Login succeeded");
    (jar.add(state.auth.session_cookie()), found("/")).into_response()
}

/// Clear the session cookie, whether or not one was sent.
pub async fn logout(jar: CookieJar) -> Response {
    tracing::info!("Logout");
    (jar.add(SessionAuth::removal_cookie()), found("/login")).into_response()
}
