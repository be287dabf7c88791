//! Password hashing for seeded accounts.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::{EngineError, ResultEngine};

/// Hash `password` on the blocking pool.
pub async fn hash_password(password: String) -> ResultEngine<String> {
    tokio::task::spawn_blocking(move || hash_password_blocking(&password))
        .await
        .map_err(|err| EngineError::PasswordHash(err.to_string()))?
}

fn hash_password_blocking(password: &str) -> ResultEngine<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| EngineError::PasswordHash(err.to_string()))
}

/// Check `password` against a stored PHC string.
pub fn verify_password(password: &str, hash: &str) -> ResultEngine<bool> {
    let parsed =
        PasswordHash::new(hash).map_err(|err| EngineError::PasswordHash(err.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
