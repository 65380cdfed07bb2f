use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::header::COOKIE;
use http::request::Parts;
use quizcraft_accounts::SessionClaims;

use crate::state::AppState;

/// The signed-in user, if the request carries a valid session cookie
///
/// Never rejects; each handler decides how to treat anonymous callers.
pub struct Session(pub Option<SessionClaims>);

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let claims = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .filter_map(|header| state.sessions.token_from_cookie_header(header))
            .find_map(|token| state.sessions.verify(token).ok());

        Ok(Self(claims))
    }
}
