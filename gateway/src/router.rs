//! HTTP Router
//!
//! Each route pairs a handler with the access it requires. Gated routes go
//! through [`authorize`](crate::middleware::authorize); public routes never
//! see the gate.

use auth::Tier;
use axum::middleware;
use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers;
use crate::middleware::{authorize, request_log};
use crate::state::AppState;

/// Access required by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Gated(Tier),
}

/// Build the gateway router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/unprotectedAPI",
            guarded(&state, Access::Public, get(handlers::unprotected_api)),
        )
        .route(
            "/protectedAPI",
            guarded(
                &state,
                Access::Gated(Tier::Authenticated),
                get(handlers::protected_api),
            ),
        )
        .route(
            "/admin",
            guarded(&state, Access::Gated(Tier::Admin), get(handlers::protected_api)),
        )
        .layer(middleware::from_fn(request_log))
        .with_state(state)
}

fn guarded(
    state: &AppState,
    access: Access,
    route: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    match access {
        Access::Public => route,
        Access::Gated(tier) => {
            route.route_layer(middleware::from_fn_with_state((state.clone(), tier), authorize))
        }
    }
}
