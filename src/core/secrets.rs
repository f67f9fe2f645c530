//! Secret values handed to the publisher.
//!
//! The publisher only ever sees an explicit name -> value mapping. Reading
//! the process environment happens once, at the CLI edge, via
//! [`SecretValues::from_env`].

use std::collections::BTreeMap;
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Result, SecretError};

/// Secret name -> value. Values are wiped from memory on drop.
#[derive(Default)]
pub struct SecretValues {
    values: BTreeMap<String, Zeroizing<String>>,
}

impl SecretValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up each name in the process environment. Names that are unset or
    /// not valid unicode are skipped; the publisher reports them when it
    /// reaches them.
    pub fn from_env<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut secrets = Self::new();
        for name in names {
            let name = name.as_ref();
            match std::env::var(name) {
                Ok(value) => secrets.insert(name, value),
                Err(_) => debug!(secret = name, "not set in environment"),
            }
        }
        secrets
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(name.into(), Zeroizing::new(value.into()));
    }

    /// The value for `name`, failing when it is absent or empty.
    pub fn require(&self, name: &str) -> Result<&str> {
        match self.values.get(name) {
            Some(value) if !value.is_empty() => Ok(value.as_str()),
            _ => Err(SecretError::NotFound(name.to_string()).into()),
        }
    }
}

impl std::fmt::Debug for SecretValues {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}

/// Validate a secret name.
///
/// Names are passed to wrangler as arguments and looked up as environment
/// variables, so they follow env var rules: A-Z, a-z, 0-9 and underscore,
/// not starting with a digit.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| -> crate::error::Error {
        SecretError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
        .into()
    };

    let first = name.chars().next().ok_or_else(|| invalid("cannot be empty"))?;
    if first.is_ascii_digit() {
        return Err(invalid("cannot start with a digit"));
    }
    if let Some(ch) = name.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Err(invalid(&format!(
            "invalid character '{}'. Only A-Z, a-z, 0-9, and underscore are allowed",
            ch
        )));
    }
    Ok(())
}
