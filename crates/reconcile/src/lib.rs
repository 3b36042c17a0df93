//! # Reconcile
//!
//! State documents exchanged between a reconciliation engine and a
//! composition function.
//!
//! Each reconcile cycle the reconciler supplies a snapshot of the observed
//! composite resource and the desired composed resources from the previous
//! cycle; the function writes its desired specs into named slots of that
//! set and hands it back. This crate provides both sides of that exchange:
//!
//! - [`ObservedComposite`]: the observed composite document, decodable into
//!   a typed model
//! - [`DesiredResources`]: the slot-keyed desired-resource set
//! - [`overlay`]: the field-level merge that makes repeated slot writes
//!   safe against provider-populated fields
//!
//! ## Example
//!
//! ```
//! use reconcile::{DesiredResources, ObservedComposite};
//! use serde_json::json;
//!
//! let observed = ObservedComposite::new(json!({"metadata": {"name": "example"}}));
//! assert_eq!(observed.document()["metadata"]["name"], "example");
//!
//! let mut desired = DesiredResources::new();
//! desired.update("rg", &json!({"spec": {"location": "eastus"}}))?;
//!
//! assert_eq!(desired.slots(), vec!["rg"]);
//! # Ok::<(), reconcile::Error>(())
//! ```

mod error;
mod merge;
mod state;

pub use error::{Error, Result};
pub use merge::overlay;
pub use state::{DesiredResources, ObservedComposite};
