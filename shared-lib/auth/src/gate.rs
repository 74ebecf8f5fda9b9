//! Access decisions for bearer-token protected resources.
//!
//! The gate turns the raw `Authorization` header and the tier a resource
//! requires into one of three outcomes. Every verification failure collapses
//! into [`AccessDecision::Unauthenticated`] so callers cannot tell which
//! check rejected the token.

use std::fmt;

use error::AuthError;

use crate::claims::Claims;
use crate::clock::{Clock, SystemClock};
use crate::jwt::TokenCodec;

/// Privilege a gated resource requires.
///
/// Public resources never reach the gate, so they have no tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Any successfully verified token
    Authenticated,
    /// A verified token with `is_admin == true`
    Admin,
}

/// Outcome of checking one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed(Claims),
    Unauthenticated,
    Forbidden,
}

impl AccessDecision {
    /// Convert to a result, mapping rejections to `Unauthorized` / `Forbidden`.
    pub fn into_result(self) -> Result<Claims, AuthError> {
        match self {
            AccessDecision::Allowed(claims) => Ok(claims),
            AccessDecision::Unauthenticated => Err(AuthError::Unauthorized),
            AccessDecision::Forbidden => Err(AuthError::Forbidden),
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// The scheme is matched case-insensitively and the value must contain
/// exactly two whitespace-separated parts.
pub fn bearer_token(authorization: Option<&str>) -> Option<&str> {
    let mut parts = authorization?.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    Some(token)
}

/// Per-request authorization check backed by a [`TokenCodec`].
#[derive(Clone)]
pub struct AccessGate<C = SystemClock> {
    codec: TokenCodec<C>,
}

impl<C: Clock> AccessGate<C> {
    pub fn new(codec: TokenCodec<C>) -> Self {
        Self { codec }
    }

    /// The codec used to verify presented tokens.
    pub fn codec(&self) -> &TokenCodec<C> {
        &self.codec
    }

    /// Decide whether a request carrying `authorization` may access a
    /// resource that requires `required`.
    ///
    /// The token is verified once; on success the claims are returned in the
    /// decision for the downstream handler.
    pub fn decide(&self, authorization: Option<&str>, required: Tier) -> AccessDecision {
        let Some(token) = bearer_token(authorization) else {
            tracing::debug!("Missing or malformed Authorization header");
            return AccessDecision::Unauthenticated;
        };

        let claims = match self.codec.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("Token rejected: {}", e);
                return AccessDecision::Unauthenticated;
            }
        };

        if required == Tier::Admin && !claims.is_admin {
            tracing::info!("User {} denied admin access", claims.username);
            return AccessDecision::Forbidden;
        }

        AccessDecision::Allowed(claims)
    }
}

impl<C> fmt::Debug for AccessGate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessGate").field("codec", &self.codec).finish()
    }
}
