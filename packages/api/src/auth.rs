// ABOUTME: Authentication context for API requests
// ABOUTME: Resolves the current actor from the bearer token or cookie

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
};

use ideenportal_ideas::sample::{DEMO_USER_ID, DEMO_USER_NAME};
use ideenportal_ideas::Actor;
use ideenportal_platform::decode_claims;

use crate::AppState;

/// Cookie set by the portal's "paste your token" flow
const TOKEN_COOKIE: &str = "platform_token";

/// Current authenticated user
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Actor);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match bearer_token(parts).or_else(|| cookie_token(parts)) {
            Some(token) => match decode_claims(&token) {
                Ok(claims) => match claims.actor_id() {
                    Some(id) => Ok(CurrentUser(Actor {
                        id: id.to_string(),
                        name: claims.display_name().to_string(),
                        email: claims.preferred_username.clone(),
                    })),
                    None => Err((
                        StatusCode::UNAUTHORIZED,
                        "Token carries no identity, please sign in again",
                    )),
                },
                Err(_) if state.service.is_demo() => Ok(Self::demo_user()),
                Err(_) => Err((
                    StatusCode::UNAUTHORIZED,
                    "Invalid bearer token, please sign in again",
                )),
            },
            None if state.service.is_demo() => Ok(Self::demo_user()),
            None => Err((StatusCode::UNAUTHORIZED, "Missing bearer token")),
        }
    }
}

impl CurrentUser {
    /// The fixed actor used when no token is presented in demo mode
    fn demo_user() -> Self {
        CurrentUser(Actor::new(DEMO_USER_ID, DEMO_USER_NAME))
    }
}

/// Token from the `Authorization: Bearer` header
fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

/// Token from the portal cookie
fn cookie_token(parts: &Parts) -> Option<String> {
    let cookies = parts
        .headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())?;

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(TOKEN_COOKIE)?.strip_prefix('='))
        .map(str::to_string)
}
