//! # Composition
//!
//! Expands an observed storage-bucket composite resource into the desired
//! Azure provider resources that realize it: a resource group, a storage
//! account, and a storage container.
//!
//! The crate is the pure-function half of a reconcile loop. An external
//! reconciler observes the composite, hands its document and the current
//! desired set to [`compose`], and applies whatever comes back; the
//! provider controllers then drive the real infrastructure, resolving the
//! selector references between siblings. Nothing here performs I/O or
//! keeps state between invocations.
//!
//! ## Example
//!
//! ```
//! use composition::{compose, StorageBucket, SLOT_ACCOUNT};
//! use reconcile::{DesiredResources, ObservedComposite};
//! use serde_json::json;
//!
//! let observed = ObservedComposite::new(json!({
//!     "metadata": {"name": "uptest-bucket"},
//!     "spec": {"parameters": {"location": "eastus", "versioning": true, "acl": "public"}},
//! }));
//!
//! let bucket: StorageBucket = observed.decode()?;
//! let mut desired = DesiredResources::new();
//! compose(&bucket, &mut desired)?;
//!
//! let account = desired.get(SLOT_ACCOUNT).unwrap();
//! assert_eq!(account["metadata"]["name"], "uptestbucket");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bucket;
mod compose;
mod error;
mod naming;
mod resources;
mod selector;

pub use bucket::{Metadata, Parameters, StorageBucket, StorageBucketSpec};
pub use compose::{SLOT_ACCOUNT, SLOT_CONTAINER, SLOT_RESOURCE_GROUP, compose};
pub use error::{Error, Result};
pub use naming::derive_account_name;
pub use resources::{
    AccessType, Account, AccountParameters, AccountSpec, BlobProperties, Container,
    ContainerParameters, ContainerSpec, RESOURCE_GROUP_API_VERSION, ResourceGroup,
    ResourceGroupParameters, ResourceGroupSpec, ResourceMetadata, STORAGE_API_VERSION,
};
pub use selector::Selector;
