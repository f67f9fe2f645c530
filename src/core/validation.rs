//! Input validation for deployment names.

use crate::error::{Result, ValidationError};

/// Validate a deployment name.
///
/// The name becomes a `[env.<name>]` table header in `wrangler.toml`, a
/// wrangler environment flag and a URL path segment, so it must be non-empty
/// and contain only A-Z, a-z, 0-9, `-` and `_`.
pub fn validate_deploy_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '-' && ch != '_' {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, a-z, 0-9, '-' and '_' are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}
