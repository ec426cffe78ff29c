//! bcrypt hashing helpers.
//!
//! bcrypt burns ~100ms of CPU per call, so both directions run under
//! `spawn_blocking` to keep the runtime's worker threads free.

use anyhow::Context as _;

use crate::error::AuthServiceError;

pub async fn hash_password(password: String) -> Result<String, AuthServiceError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .context("join password hash task")?
        .context("hash password")?;
    Ok(hash)
}

pub async fn verify_password(password: String, hash: String) -> Result<bool, AuthServiceError> {
    let ok = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .context("join password verify task")?
        .context("verify password")?;
    Ok(ok)
}
