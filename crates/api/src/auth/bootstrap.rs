//! Admin account seeding at startup.
//!
//! The admin credential comes from one of two places:
//!
//! 1. `ADMIN_CREDENTIALS_FILE` -- a JSON file `{ "username", "password_hash" }`
//!    holding an Argon2id PHC hash or a bcrypt hash.
//! 2. `ADMIN_USERNAME` + `ADMIN_PASSWORD` -- plain credentials hashed here.
//!
//! The file wins when both are set. The row is upserted on every start so
//! rotating the credential only needs a restart.

use std::path::{Path, PathBuf};

use coachhub_db::models::admin::{Admin, AdminCredentials};
use coachhub_db::repositories::AdminRepo;
use coachhub_db::DbPool;

use crate::auth::password::{hash_password, is_valid_hash};

/// Where the admin credential is read from.
#[derive(Debug, Clone)]
pub enum AdminSeed {
    File(PathBuf),
    Plain { username: String, password: String },
}

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to read admin credentials file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Admin credentials file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid admin credentials: {0}")]
    Invalid(String),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AdminSeed {
    /// Read the seed source from the environment, or `None` if nothing is set.
    pub fn from_env() -> Option<Self> {
        if let Ok(path) = std::env::var("ADMIN_CREDENTIALS_FILE") {
            if !path.trim().is_empty() {
                return Some(Self::File(PathBuf::from(path)));
            }
        }

        match (
            std::env::var("ADMIN_USERNAME"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(username), Ok(password)) => Some(Self::Plain { username, password }),
            _ => None,
        }
    }

    /// Resolve the seed into a username / password-hash pair.
    pub fn credentials(&self) -> Result<AdminCredentials, BootstrapError> {
        let creds = match self {
            Self::File(path) => read_credentials_file(path)?,
            Self::Plain { username, password } => {
                if password.is_empty() {
                    return Err(BootstrapError::Invalid("password must not be empty".into()));
                }
                AdminCredentials {
                    username: username.clone(),
                    password_hash: hash_password(password)
                        .map_err(|e| BootstrapError::Hash(e.to_string()))?,
                }
            }
        };

        let username = creds.username.trim();
        if username.is_empty() {
            return Err(BootstrapError::Invalid("username must not be empty".into()));
        }
        if !is_valid_hash(&creds.password_hash) {
            return Err(BootstrapError::Invalid(
                "password_hash must be an Argon2 PHC string or a bcrypt hash".into(),
            ));
        }

        Ok(AdminCredentials {
            username: username.to_string(),
            password_hash: creds.password_hash,
        })
    }
}

fn read_credentials_file(path: &Path) -> Result<AdminCredentials, BootstrapError> {
    let raw = std::fs::read_to_string(path).map_err(|source| BootstrapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Upsert the admin row from `seed`.
///
/// With no seed, the existing table is left alone; a warning is logged if it
/// is empty because nobody will be able to log in.
pub async fn seed_admin(
    pool: &DbPool,
    seed: Option<&AdminSeed>,
) -> Result<Option<Admin>, BootstrapError> {
    let Some(seed) = seed else {
        if AdminRepo::count(pool).await? == 0 {
            tracing::warn!(
                "No admin credentials configured and no admin account exists; \
                 set ADMIN_CREDENTIALS_FILE or ADMIN_USERNAME/ADMIN_PASSWORD"
            );
        }
        return Ok(None);
    };

    let creds = seed.credentials()?;
    let admin = AdminRepo::upsert(pool, &creds).await?;
    tracing::info!(admin_id = admin.id, username = %admin.username, "Admin account seeded");
    Ok(Some(admin))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;

    use super::*;
    use crate::auth::password::verify_password;

    #[test]
    fn plain_seed_is_hashed() {
        let seed = AdminSeed::Plain {
            username: " admin ".into(),
            password: "s3cret-pass".into(),
        };
        let creds = seed.credentials().unwrap();
        assert_eq!(creds.username, "admin");
        assert!(verify_password("s3cret-pass", &creds.password_hash).unwrap());
    }

    #[test]
    fn file_seed_is_read() {
        let hash = hash_password("from-file").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            serde_json::json!({"username": "owner", "password_hash": hash})
        )
        .unwrap();

        let creds = AdminSeed::File(file.path().to_path_buf())
            .credentials()
            .unwrap();
        assert_eq!(creds.username, "owner");
        assert_eq!(creds.password_hash, hash);
    }

    #[test]
    fn file_with_bcrypt_hash_is_accepted() {
        let hash = bcrypt::hash("from-file", 4).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            serde_json::json!({"username": "admin", "password_hash": hash})
        )
        .unwrap();

        let creds = AdminSeed::File(file.path().to_path_buf())
            .credentials()
            .unwrap();
        assert_eq!(creds.password_hash, hash);
        assert!(verify_password("from-file", &creds.password_hash).unwrap());
    }

    #[test]
    fn file_with_plaintext_password_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"username": "owner", "password_hash": "hunter2"}}"#).unwrap();

        assert_matches!(
            AdminSeed::File(file.path().to_path_buf()).credentials(),
            Err(BootstrapError::Invalid(_))
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        assert_matches!(
            AdminSeed::File(PathBuf::from("/nonexistent/admin.json")).credentials(),
            Err(BootstrapError::Io { .. })
        );
    }

    #[test]
    fn empty_password_is_rejected() {
        let seed = AdminSeed::Plain {
            username: "admin".into(),
            password: String::new(),
        };
        assert_matches!(seed.credentials(), Err(BootstrapError::Invalid(_)));
    }
}
