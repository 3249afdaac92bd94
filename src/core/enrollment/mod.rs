//! Student-course enrollment with flat-file persistence

pub mod codec;
pub mod store;

pub use codec::{decode, encode, load, save, Decoded};
pub use store::EnrollmentStore;
