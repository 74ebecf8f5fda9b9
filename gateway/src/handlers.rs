//! Endpoint handlers.

use auth::Claims;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};

/// Body of the public endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnprotectedResponse {
    pub data: String,
}

/// Body of the authenticated and admin endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedResponse {
    pub data: String,
    pub username: String,
    pub is_admin: bool,
}

/// Public data, no token required.
pub async fn unprotected_api() -> Json<UnprotectedResponse> {
    Json(UnprotectedResponse {
        data: "some unprotected data to send back".to_string(),
    })
}

/// Protected data, echoing the caller's identity from the verified claims.
pub async fn protected_api(Extension(claims): Extension<Claims>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        data: "some data to send back".to_string(),
        username: claims.username,
        is_admin: claims.is_admin,
    })
}
