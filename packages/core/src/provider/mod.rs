//! Document and mapping provider capabilities
//!
//! The evaluator never touches a node's structure directly; every
//! inspection and mutation goes through the `DocumentProvider` injected
//! into the `Configuration`, so alternative node semantics can be
//! swapped in without engine changes.

mod serde_provider;
mod types;

pub use serde_provider::{SerdeDocumentProvider, SerdeMappingProvider};
pub use types::{DocumentProvider, MappingProvider};
