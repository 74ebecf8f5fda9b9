//! Authentication and authorization library for the gateway.
//!
//! This crate issues and verifies HS256 bearer tokens and decides whether a
//! request may reach an authenticated or admin-only resource.

mod claims;
mod clock;
mod gate;
mod jwt;

pub use self::claims::Claims;
pub use self::clock::{Clock, ManualClock, SystemClock};
pub use self::gate::{bearer_token, AccessDecision, AccessGate, Tier};
pub use self::jwt::{decode_token, encode_token, TokenCodec, ALGORITHM};
