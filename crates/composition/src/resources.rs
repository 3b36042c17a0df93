//! Typed provider resource specs
//!
//! One struct per composed resource kind, in the provider's wire shape
//! (`apiVersion`/`kind` discriminators, parameters under
//! `spec.forProvider`, camelCase field names). The structs only model the
//! fields this engine sets; everything else a provider controller writes
//! into a slot survives untouched because slot writes are overlays.

use crate::selector::Selector;
use serde::Serialize;

/// API group/version of the resource-group kind.
pub const RESOURCE_GROUP_API_VERSION: &str = "azure.upbound.io/v1beta1";
/// API group/version of the storage kinds.
pub const STORAGE_API_VERSION: &str = "storage.azure.upbound.io/v1beta1";

/// External-identity metadata attached to a composed resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceMetadata {
    /// External name the provider should assign
    pub name: String,
}

/// An Azure resource group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroup {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub spec: ResourceGroupSpec,
}

/// Spec of an Azure resource group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupSpec {
    pub for_provider: ResourceGroupParameters,
}

/// Provider-facing parameters of a resource group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGroupParameters {
    pub location: String,
}

impl ResourceGroup {
    /// Build a resource group in the given location.
    ///
    /// No external name is set; the provider auto-assigns one.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            api_version: RESOURCE_GROUP_API_VERSION,
            kind: "ResourceGroup",
            spec: ResourceGroupSpec {
                for_provider: ResourceGroupParameters {
                    location: location.into(),
                },
            },
        }
    }
}

/// An Azure storage account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub metadata: ResourceMetadata,
    pub spec: AccountSpec,
}

/// Spec of an Azure storage account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSpec {
    pub for_provider: AccountParameters,
}

/// Provider-facing parameters of a storage account.
///
/// Tier, replication, and infrastructure encryption are a fixed baseline:
/// locally-redundant standard storage with encryption always on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountParameters {
    pub account_tier: &'static str,
    pub account_replication_type: &'static str,
    pub location: String,
    pub infrastructure_encryption_enabled: bool,
    pub blob_properties: Vec<BlobProperties>,
    pub resource_group_name_selector: Selector,
}

/// Blob-service policy block on a storage account.
///
/// The provider schema models this as a repeated field even though exactly
/// one entry is ever set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobProperties {
    pub versioning_enabled: bool,
}

impl Account {
    /// Build a storage account with the fixed baseline plus the forwarded
    /// name, location, and versioning flag.
    pub fn new(name: impl Into<String>, location: impl Into<String>, versioning: bool) -> Self {
        Self {
            api_version: STORAGE_API_VERSION,
            kind: "Account",
            metadata: ResourceMetadata { name: name.into() },
            spec: AccountSpec {
                for_provider: AccountParameters {
                    account_tier: "Standard",
                    account_replication_type: "LRS",
                    location: location.into(),
                    infrastructure_encryption_enabled: true,
                    blob_properties: vec![BlobProperties {
                        versioning_enabled: versioning,
                    }],
                    resource_group_name_selector: Selector::ControllerRef,
                },
            },
        }
    }
}

/// An Azure storage container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub api_version: &'static str,
    pub kind: &'static str,
    pub spec: ContainerSpec,
}

/// Spec of an Azure storage container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerSpec {
    pub for_provider: ContainerParameters,
}

/// Provider-facing parameters of a storage container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerParameters {
    pub container_access_type: AccessType,
    pub storage_account_name_selector: Selector,
}

/// Container access level understood by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// Anonymous read access to blobs
    Blob,
    /// No anonymous access
    Private,
}

impl AccessType {
    /// Map the claim's `acl` parameter onto an access type.
    ///
    /// Only `"public"` opens the container up; anything else, including an
    /// absent or unrecognized value, collapses to [`AccessType::Private`].
    pub fn from_acl(acl: Option<&str>) -> Self {
        match acl {
            Some("public") => Self::Blob,
            _ => Self::Private,
        }
    }
}

impl Container {
    /// Build a storage container with the given access type.
    pub fn new(access_type: AccessType) -> Self {
        Self {
            api_version: STORAGE_API_VERSION,
            kind: "Container",
            spec: ContainerSpec {
                for_provider: ContainerParameters {
                    container_access_type: access_type,
                    storage_account_name_selector: Selector::ControllerRef,
                },
            },
        }
    }
}
