//! Session resolution. Sessions are issued by the authentication service;
//! this module only maps the `sid` cookie to a user.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::User;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "sid";

/// The authenticated caller. Rejects with 401 when the session is missing,
/// malformed, unknown or expired.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session_id = session_id(&parts.headers).ok_or(AppError::Unauthorized)?;
        let user = state
            .store
            .session_user(session_id)
            .await?
            .ok_or(AppError::Unauthorized)?;
        Ok(AuthUser(user))
    }
}

/// Extracts the session id from any `Cookie` header.
fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookies: &[&str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for cookie in cookies {
            map.append(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        }
        map
    }

    #[test]
    fn test_finds_sid_among_other_cookies() {
        let id = Uuid::new_v4();
        let cookie = format!("theme=dark; sid={id}; lang=en");
        let map = headers(&[cookie.as_str()]);
        assert_eq!(session_id(&map), Some(id));
    }

    #[test]
    fn test_finds_sid_in_second_cookie_header() {
        let id = Uuid::new_v4();
        let cookie = format!("sid={id}");
        let map = headers(&["theme=dark", cookie.as_str()]);
        assert_eq!(session_id(&map), Some(id));
    }

    #[test]
    fn test_missing_or_malformed_sid() {
        assert_eq!(session_id(&headers(&[])), None);
        assert_eq!(session_id(&headers(&["sid=not-a-uuid"])), None);
        assert_eq!(session_id(&headers(&["sidx=123"])), None);
    }
}
