//! Cross-resource selector references
//!
//! A composed resource never names its siblings directly: at composition
//! time nobody knows what external names the provider will settle on, or in
//! which order the controllers will get the resources ready. Instead a spec
//! carries a selector describing how to find the sibling at reconcile time.
//! Resolution happens in the provider controller, never here.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A declarative reference to a sibling composed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Match whichever sibling is controlled by the same composite
    /// instance as this resource.
    ControllerRef,
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::ControllerRef => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("matchControllerRef", &true)?;
                map.end()
            }
        }
    }
}
