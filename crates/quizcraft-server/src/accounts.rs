use axum::Form;
use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use http::StatusCode;
use http::header::SET_COOKIE;
use quizcraft_accounts::SignupForm;
use quizcraft_core::HttpError;
use serde::Deserialize;

use crate::error::log_failure;
use crate::pages;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    registered: Option<String>,
}

/// `GET /`
pub async fn index(State(state): State<AppState>, Session(user): Session) -> Response {
    match user {
        Some(user) => pages::index(&user.username, state.transcriber.is_some()).into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

/// `GET /signup`
pub async fn signup_page(Session(user): Session) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }

    pages::signup(None, "", "").into_response()
}

/// `POST /signup`
pub async fn signup(State(state): State<AppState>, form: Result<Form<SignupForm>, FormRejection>) -> Response {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    match state.accounts.signup(&form).await {
        Ok(_) => Redirect::to("/login?registered=1").into_response(),
        Err(e) => {
            log_failure("signup", &e);
            let page = pages::signup(Some(&e.client_message()), &form.username, &form.email);
            (e.status_code(), page).into_response()
        }
    }
}

/// `GET /login`
pub async fn login_page(Session(user): Session, query: Result<Query<LoginQuery>, QueryRejection>) -> Response {
    if user.is_some() {
        return Redirect::to("/").into_response();
    }

    let query = query.map(|Query(query)| query).unwrap_or_default();
    let notice = query
        .registered
        .is_some()
        .then_some("Account created. Please log in.");

    pages::login(None, notice, "").into_response()
}

/// `POST /login`
pub async fn login(State(state): State<AppState>, form: Result<Form<LoginForm>, FormRejection>) -> Response {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    let account = match state.accounts.login(&form.identifier, &form.password).await {
        Ok(account) => account,
        Err(e) => {
            log_failure("login", &e);
            let page = pages::login(Some(&e.client_message()), None, &form.identifier);
            return (e.status_code(), page).into_response();
        }
    };

    match state.sessions.issue(&account) {
        Ok(token) => {
            let cookie = state.sessions.cookie(&token);
            ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response()
        }
        Err(e) => {
            log_failure("login", &e);
            let page = pages::login(Some(&e.client_message()), None, &form.identifier);
            (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
        }
    }
}

/// `GET /logout`
pub async fn logout(State(state): State<AppState>, Session(user): Session) -> Response {
    if let Some(user) = user {
        tracing::info!(account_id = user.account_id, "logged out");
    }

    ([(SET_COOKIE, state.sessions.clear_cookie())], Redirect::to("/login")).into_response()
}
