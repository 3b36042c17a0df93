//! Observed storage-bucket composite resource
//!
//! The model mirrors what the reconciler observes: object metadata plus the
//! user-facing parameters of the bucket claim. Every field is optional at
//! the document level; [`crate::compose`] decides which absences are
//! errors and which fall back to a default.

use serde::{Deserialize, Serialize};

/// The observed storage-bucket composite resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageBucket {
    /// Object metadata; `name` seeds the derived account name
    #[serde(default)]
    pub metadata: Metadata,
    /// Declared intent
    #[serde(default)]
    pub spec: StorageBucketSpec,
}

/// Object metadata carried by the composite resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Composite instance name, conventionally lowercase alphanumeric
    /// segments separated by hyphens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Declared intent of the composite resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageBucketSpec {
    /// User-facing parameters
    #[serde(default)]
    pub parameters: Parameters,
}

/// User-facing parameters of the bucket claim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Region the provider resources are created in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Whether blob versioning is enabled on the storage account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versioning: Option<bool>,
    /// Requested access level: `"public"` or `"private"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_document() {
        let bucket: StorageBucket = serde_json::from_value(json!({
            "apiVersion": "example.org/v1alpha1",
            "kind": "XStorageBucket",
            "metadata": {"name": "my-bucket", "labels": {"team": "storage"}},
            "spec": {"parameters": {"location": "eastus", "versioning": true, "acl": "public"}},
        }))
        .unwrap();

        assert_eq!(bucket.metadata.name.as_deref(), Some("my-bucket"));
        assert_eq!(bucket.spec.parameters.location.as_deref(), Some("eastus"));
        assert_eq!(bucket.spec.parameters.versioning, Some(true));
        assert_eq!(bucket.spec.parameters.acl.as_deref(), Some("public"));
    }

    #[test]
    fn test_deserialize_sparse_document() {
        let bucket: StorageBucket = serde_json::from_value(json!({
            "metadata": {"name": "my-bucket"},
            "spec": {"parameters": {}},
        }))
        .unwrap();

        assert_eq!(bucket.metadata.name.as_deref(), Some("my-bucket"));
        assert!(bucket.spec.parameters.location.is_none());
        assert!(bucket.spec.parameters.versioning.is_none());
        assert!(bucket.spec.parameters.acl.is_none());
    }

    #[test]
    fn test_deserialize_empty_document() {
        let bucket: StorageBucket = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bucket, StorageBucket::default());
    }
}
