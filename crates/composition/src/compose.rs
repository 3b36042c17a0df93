//! The composition engine
//!
//! One observed storage-bucket composite is expanded into the provider
//! resources that realize it: a resource group, a storage account, and a
//! storage container. The engine is a pure function of the observed
//! document: no I/O, no clock, no state across invocations. It writes
//! exactly three fixed slots of the desired set and touches nothing else;
//! slot writes are overlays, so provider-populated fields from earlier
//! cycles survive.

use crate::bucket::StorageBucket;
use crate::error::{Error, Result};
use crate::naming::derive_account_name;
use crate::resources::{AccessType, Account, Container, ResourceGroup};
use reconcile::DesiredResources;

/// Slot holding the resource group.
pub const SLOT_RESOURCE_GROUP: &str = "rg";
/// Slot holding the storage account.
pub const SLOT_ACCOUNT: &str = "account";
/// Slot holding the storage container.
pub const SLOT_CONTAINER: &str = "container";

/// Compose the desired provider resources for an observed bucket.
///
/// Fails without touching `desired` if the observed document is missing
/// its name or location, or if the derived account name violates the
/// provider's naming constraint.
pub fn compose(bucket: &StorageBucket, desired: &mut DesiredResources) -> Result<()> {
    let name = require(bucket.metadata.name.as_deref(), "metadata.name")?;
    let params = &bucket.spec.parameters;
    let location = require(params.location.as_deref(), "spec.parameters.location")?;

    let account_name = derive_account_name(name)?;
    log::debug!("composing bucket {name:?}, derived account name {account_name:?}");

    desired.update(SLOT_RESOURCE_GROUP, &ResourceGroup::new(location))?;
    desired.update(
        SLOT_ACCOUNT,
        &Account::new(account_name, location, params.versioning.unwrap_or(false)),
    )?;
    desired.update(
        SLOT_CONTAINER,
        &Container::new(AccessType::from_acl(params.acl.as_deref())),
    )?;

    Ok(())
}

fn require<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingField(field))
}
