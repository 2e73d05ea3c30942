use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use std::sync::Arc;

use crate::kernel::{AuthUser, BaseSessionService};

/// Resolved authentication state for a request.
#[derive(Clone, Debug)]
pub struct AuthContext(pub Option<AuthUser>);

/// Middleware to resolve the session and record the current user
///
/// This middleware:
/// 1. Extracts the session token from the Authorization header
/// 2. Asks the session provider for the current user
/// 3. Stores AuthContext in request extensions
///
/// Note: This middleware does NOT block requests - it only extracts auth
/// info. Gated handlers redirect to the sign-in flow when no user is
/// present.
pub async fn session_auth_middleware(
    sessions: Arc<dyn BaseSessionService>,
    mut request: Request,
    next: Next,
) -> Response {
    let user = extract_auth_user(request.headers(), sessions.as_ref()).await;

    request.extensions_mut().insert(AuthContext(user));

    next.run(request).await
}

/// Extract and resolve the auth user from a request
async fn extract_auth_user(
    headers: &HeaderMap,
    sessions: &dyn BaseSessionService,
) -> Option<AuthUser> {
    // Extract session token from Authorization header
    let token = {
        let auth_header = headers.get("authorization")?;
        let auth_str = auth_header.to_str().ok()?;

        // Remove "Bearer " prefix
        auth_str.strip_prefix("Bearer ").unwrap_or(auth_str).to_owned()
    };

    sessions.current_user(&token).await
}
