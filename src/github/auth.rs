//! GitHub token detection.
//!
//! The bot runs unattended, so only environment variables are consulted:
//! `GITHUB_TOKEN` first, then `GH_TOKEN`.

use std::env;

use crate::error::SourceError;

/// Get a GitHub token from the environment.
pub fn get_github_token() -> Result<String, SourceError> {
    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(token) = env::var(var)
            && !token.is_empty()
        {
            return Ok(token);
        }
    }

    Err(SourceError::AuthenticationFailed)
}
