//! Icon domain model: taxonomy, metadata, and the on-disk store.

pub mod branch;
pub mod meta;
pub mod store;

pub use branch::{Branch, Category};
pub use meta::{IconDraft, IconMetadata};
pub use store::{IconStore, StoredIcon};
