//! Credential management module
//!
//! Loads argon2 PHC hashes from an external file and verifies login attempts
//! against them. No secret is compiled into the binary.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

pub const CREDENTIALS_PATH_ENV: &str = "PWD_GAUGE_CREDENTIALS_PATH";
const DEFAULT_CREDENTIALS_PATH: &str = "./assets/credentials.txt";

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Credentials file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read credentials file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Credentials file is empty")]
    EmptyFile,
    #[error("Malformed credentials entry on line {line}")]
    MalformedEntry { line: usize },
    #[error("Invalid password hash for identifier '{identifier}'")]
    InvalidHash { identifier: String },
    #[error("Failed to hash secret: {0}")]
    Hashing(String),
}

/// Anything that can decide whether an identifier/secret pair grants access.
pub trait CredentialVerifier {
    /// Returns `Ok(true)` on match, `Ok(false)` on mismatch or unknown identifier.
    fn verify(&self, identifier: &str, secret: &SecretString) -> Result<bool, CredentialError>;
}

/// In-memory map of identifier to PHC hash string.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: HashMap<String, String>,
}

/// Returns the credentials file path.
///
/// Priority:
/// 1. Environment variable `PWD_GAUGE_CREDENTIALS_PATH`
/// 2. Default path `./assets/credentials.txt`
pub fn get_credentials_path() -> PathBuf {
    std::env::var(CREDENTIALS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_PATH))
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the store from the path given by [`get_credentials_path`].
    ///
    /// # Errors
    ///
    /// See [`CredentialStore::load_from_path`].
    pub fn load() -> Result<Self, CredentialError> {
        Self::load_from_path(get_credentials_path())
    }

    /// Loads `identifier:phc-hash` lines from `path`.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no entries
    /// - A line has no `:` separator or an empty identifier
    /// - A hash is not a valid PHC string
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CredentialError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Credentials load FAILED: FileNotFound {:?}", path);
            return Err(CredentialError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let store = Self::parse(&content)?;

        #[cfg(feature = "tracing")]
        tracing::info!("Credentials loaded: {} identifiers from {:?}", store.len(), path);

        Ok(store)
    }

    fn parse(content: &str) -> Result<Self, CredentialError> {
        let mut store = Self::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // PHC strings contain '$' and ',' but never ':'
            let (identifier, hash) = line
                .split_once(':')
                .ok_or(CredentialError::MalformedEntry { line: idx + 1 })?;
            let identifier = identifier.trim();
            if identifier.is_empty() {
                return Err(CredentialError::MalformedEntry { line: idx + 1 });
            }

            store.insert(identifier, hash.trim())?;
        }

        if store.is_empty() {
            return Err(CredentialError::EmptyFile);
        }
        Ok(store)
    }

    /// Adds or replaces an identifier with an already-hashed secret.
    ///
    /// # Errors
    ///
    /// `InvalidHash` if `phc_hash` does not parse.
    pub fn insert(&mut self, identifier: &str, phc_hash: &str) -> Result<(), CredentialError> {
        PasswordHash::new(phc_hash).map_err(|_| CredentialError::InvalidHash {
            identifier: identifier.to_string(),
        })?;
        self.entries
            .insert(identifier.to_string(), phc_hash.to_string());
        Ok(())
    }

    /// Hashes a secret into a PHC string suitable for the credentials file.
    ///
    /// # Errors
    ///
    /// `Hashing` if argon2 rejects the input.
    pub fn hash_secret(secret: &SecretString) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(secret.expose_secret().as_bytes(), &salt)
            .map_err(|e| CredentialError::Hashing(e.to_string()))?;
        Ok(hash.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }
}

impl CredentialVerifier for CredentialStore {
    fn verify(&self, identifier: &str, secret: &SecretString) -> Result<bool, CredentialError> {
        let Some(phc) = self.entries.get(identifier) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("login attempt for unknown identifier");
            return Ok(false);
        };

        let parsed = PasswordHash::new(phc).map_err(|_| CredentialError::InvalidHash {
            identifier: identifier.to_string(),
        })?;

        // Argon2::default() can verify any Argon2 variant
        Ok(Argon2::default()
            .verify_password(secret.expose_secret().as_bytes(), &parsed)
            .is_ok())
    }
}
