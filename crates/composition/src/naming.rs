//! Storage-account name derivation
//!
//! Azure storage account names must be 3-24 character lowercase
//! alphanumeric strings, globally unique within Azure. Composite instance
//! names are conventionally lowercase alphanumeric segments separated by
//! hyphens, so stripping the hyphens yields a valid name in the common
//! case. Uniqueness is the provider's problem; the charset and length
//! constraints are checked here so a bad seed fails at composition time
//! instead of as an opaque provider-side rejection.

use crate::error::{Error, Result};

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 24;

/// Derive the storage-account external name from the composite name.
pub fn derive_account_name(composite_name: &str) -> Result<String> {
    let name: String = composite_name.chars().filter(|c| *c != '-').collect();

    let valid_charset = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if name.len() < MIN_LEN || name.len() > MAX_LEN || !valid_charset {
        return Err(Error::NamingConstraint { name });
    }

    Ok(name)
}
