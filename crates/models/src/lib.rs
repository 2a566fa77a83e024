//! Record types exchanged over the phones API.

pub mod phone;

pub use phone::{Characteristic, Phone};
