//! Storage for the service layer.
//!
//! Everything lives in process memory; nothing survives a restart.

pub mod phone_store;
