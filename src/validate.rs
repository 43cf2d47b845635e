//! Argument validation helpers.
//!
//! Small predicates shared by the API operations. Two distinct multi-field
//! checks exist on purpose: [`require_all`] insists on every named field,
//! [`require_any`] on at least one.

use crate::error::{BranchError, Result};

/// True when the value is not provided at all.
pub fn is_absent(value: Option<&str>) -> bool {
    value.is_none()
}

/// True when the value is not provided or is an empty string.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Require a single named argument to be non-empty.
pub fn require(name: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BranchError::MissingParameter { name });
    }
    Ok(())
}

/// Require every named field to be non-blank, failing with the first blank
/// field's name.
pub fn require_all(fields: &[(&'static str, Option<&str>)]) -> Result<()> {
    for (name, value) in fields {
        if is_blank(*value) {
            return Err(BranchError::MissingParameter { name });
        }
    }
    Ok(())
}

/// Require at least one named field to be non-blank. When all are blank,
/// fails with the first field's name.
pub fn require_any(fields: &[(&'static str, Option<&str>)]) -> Result<()> {
    if fields.iter().any(|(_, value)| !is_blank(*value)) {
        return Ok(());
    }
    let name = fields.first().map_or("value", |(name, _)| *name);
    Err(BranchError::MissingParameter { name })
}
