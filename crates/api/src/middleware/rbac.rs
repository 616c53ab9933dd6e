//! Role-based access control extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use coachhub_core::error::CoreError;
use coachhub_core::roles::ROLE_ADMIN;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 401 without a valid token and
/// 403 for any other role.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = <AuthUser as FromRequestParts<AppState>>::from_request_parts(parts, state)
            .await?;
        ensure_admin(Some(user)).map(RequireAdmin)
    }
}

/// Admin check for handlers that are public by default and only need the
/// admin role for some query variants.
pub fn ensure_admin(user: Option<AuthUser>) -> Result<AuthUser, AppError> {
    let user = user.ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized(
            "Missing Authorization header".into(),
        ))
    })?;
    if user.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Forbidden(
            "Admin role required".into(),
        )));
    }
    Ok(user)
}
