use std::sync::Arc;

use auth::{AccessGate, Clock, SystemClock, TokenCodec};
use error::AuthError;

/// Time source shared by every request.
pub type SharedClock = Arc<dyn Clock>;

/// Access gate shared by every request.
pub type SharedGate = Arc<AccessGate<SharedClock>>;

/// Read-only state handed to every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub gate: SharedGate,
}

impl AppState {
    /// Build state that verifies tokens against `secret` using the wall clock.
    pub fn new(secret: &[u8]) -> Result<Self, AuthError> {
        Self::with_clock(secret, Arc::new(SystemClock))
    }

    /// Build state with an explicit time source.
    pub fn with_clock(secret: &[u8], clock: SharedClock) -> Result<Self, AuthError> {
        let codec = TokenCodec::with_clock(secret, clock)?;
        Ok(Self {
            gate: Arc::new(AccessGate::new(codec)),
        })
    }
}
