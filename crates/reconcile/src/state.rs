//! Observed and desired state documents for one reconcile cycle

use crate::error::Result;
use crate::merge::overlay;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The observed composite resource, as supplied by the reconciler.
///
/// The reconciler hands over an arbitrary structured document; it is decoded
/// into a typed model at the point of use. The document itself is read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservedComposite(Value);

impl ObservedComposite {
    /// Wrap an observed composite document.
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// Decode the document into a typed model.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.0.clone())?)
    }

    /// The raw document.
    pub fn document(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for ObservedComposite {
    fn from(document: Value) -> Self {
        Self::new(document)
    }
}

/// Desired composed resources for one reconcile cycle, keyed by logical
/// slot name.
///
/// The set is owned by the caller, which seeds it with whatever desired
/// state the previous cycle produced and persists it afterwards. An engine
/// writes individual slots through [`DesiredResources::update`], which
/// overlays rather than replaces, so provider-populated fields survive
/// repeated invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesiredResources {
    resources: BTreeMap<String, Value>,
}

impl DesiredResources {
    /// Create an empty desired-resource set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay a desired spec into the named slot.
    ///
    /// An empty slot is populated entirely; an occupied slot keeps every
    /// field the spec does not set (see [`crate::merge::overlay`]).
    pub fn update<T: Serialize>(&mut self, slot: &str, desired: &T) -> Result<()> {
        let patch = serde_json::to_value(desired)?;
        log::debug!("overlaying desired resource into slot {slot:?}");
        let target = self
            .resources
            .entry(slot.to_string())
            .or_insert(Value::Null);
        overlay(target, patch);
        Ok(())
    }

    /// Seed a slot with a raw document, replacing any existing content.
    ///
    /// This is the caller-side operation for carrying forward state from a
    /// previous cycle; engines use [`DesiredResources::update`].
    pub fn insert(&mut self, slot: impl Into<String>, document: Value) {
        self.resources.insert(slot.into(), document);
    }

    /// The document currently held in a slot, if any.
    pub fn get(&self, slot: &str) -> Option<&Value> {
        self.resources.get(slot)
    }

    /// Iterate over `(slot, document)` pairs in slot-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.resources.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The slot names currently populated, in order.
    pub fn slots(&self) -> Vec<&str> {
        self.resources.keys().map(String::as_str).collect()
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether no slot is populated.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for DesiredResources {
    fn from(resources: BTreeMap<String, Value>) -> Self {
        Self { resources }
    }
}
