/**
 * Role Gate
 *
 * Rejects callers whose role is not in a route's allowed set. Membership is
 * exact: there is no hierarchy, so `admin` is only allowed where it is
 * listed.
 */

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::backend::server::state::AppState;
use crate::shared::Role;

/// The set of roles allowed through a gate
#[derive(Clone, Copy, Debug)]
pub struct AllowedRoles(pub &'static [Role]);

/// Routes that create or edit catalogue entries
pub const EDITORS: AllowedRoles = AllowedRoles(&[Role::ReadWrite, Role::Admin]);

/// Destructive routes, user administration and wishlist writes
pub const ADMINS: AllowedRoles = AllowedRoles(&[Role::Admin]);

impl AllowedRoles {
    pub fn permits(&self, role: Role) -> bool {
        self.0.contains(&role)
    }
}

/// Role middleware; expects `auth_middleware` to have run first
///
/// No identity attached → 401, role not allowed → 403.
pub async fn require_roles(
    allowed: AllowedRoles,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .copied()
        .ok_or_else(ApiError::unauthenticated)?;

    if !allowed.permits(user.role) {
        tracing::warn!(
            "Forbidden: user {} with role {} on {} {}",
            user.user_id,
            user.role,
            request.method(),
            request.uri().path()
        );
        return Err(ApiError::forbidden());
    }

    Ok(next.run(request).await)
}

/// Put the methods of `method_router` behind bearer authentication and
/// `allowed`
///
/// The gate is a `MethodRouter::route_layer`, so it wraps only the methods
/// registered here. Other methods on the same path still answer 405 after
/// the method routers are merged.
pub fn gated(
    method_router: MethodRouter<AppState>,
    app_state: &AppState,
    allowed: AllowedRoles,
) -> MethodRouter<AppState> {
    method_router
        .route_layer(middleware::from_fn(move |request: Request, next: Next| {
            require_roles(allowed, request, next)
        }))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_gate_rejects_read_write() {
        assert!(!ADMINS.permits(Role::ReadWrite));
        assert!(!ADMINS.permits(Role::Read));
        assert!(ADMINS.permits(Role::Admin));
    }

    #[test]
    fn test_editor_gate_is_exact_membership() {
        assert!(EDITORS.permits(Role::ReadWrite));
        assert!(EDITORS.permits(Role::Admin));
        assert!(!EDITORS.permits(Role::Read));

        let read_write_only = AllowedRoles(&[Role::ReadWrite]);
        assert!(!read_write_only.permits(Role::Admin));
    }
}
