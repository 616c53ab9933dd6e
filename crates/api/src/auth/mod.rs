//! Authentication primitives for the admin account.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`bootstrap`] -- seeding the admin row from a credentials file or env.

pub mod bootstrap;
pub mod jwt;
pub mod password;
