//! Role names embedded in access tokens.

/// The single administrative role. Only the seeded admin account holds it.
pub const ROLE_ADMIN: &str = "admin";
