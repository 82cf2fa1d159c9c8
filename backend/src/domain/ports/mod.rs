//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod document_store;
mod resource_service;

#[cfg(test)]
pub use document_store::MockQuizStore;
pub use document_store::{DocumentStore, DocumentStoreError};
pub use resource_service::ResourceService;
