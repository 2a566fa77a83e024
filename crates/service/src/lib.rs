//! Service layer holding the in-memory phone record store.
//! - Owns the domain error type returned to the HTTP layer.
//! - Keeps insertion order so listings match what was submitted.

pub mod errors;
pub mod storage;

pub use storage::phone_store::PhoneStore;
