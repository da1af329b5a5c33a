//! Capability registry wiring.
//!
//! Services are grouped by [`Category`] and resolve to a [`ServiceDescriptor`]
//! rooted under the install directory. Callers use [`CapabilityRegistry`] for
//! search and lookup; the [`ContentIndex`] it owns caches file contents on
//! request.

pub mod identity;
pub mod index;
pub mod model;
pub mod repository;

pub use identity::{Category, ServiceKey};
pub use index::CapabilityRegistry;
pub use model::{Match, ServiceDescriptor};
pub use repository::{ContentIndex, IndexReport, ReadFailure};
