use std::env::VarError;

use anyhow::{bail, Result};

/// Get an env var as a String; decoding failures are reported as
/// errors.
pub fn getenv(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(s) => Ok(Some(s)),
        Err(e) => match e {
            VarError::NotPresent => Ok(None),
            VarError::NotUnicode(_) => bail!("{name:?} env var is not unicode"),
        },
    }
}

pub fn getenv_or(name: &str, fallback: &str) -> Result<String> {
    Ok(getenv(name)?.unwrap_or_else(|| fallback.to_string()))
}
