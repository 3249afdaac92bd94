//! Shared library for `school-records`
//! Contains the records domain and the CLI configuration layer

pub mod config;
pub mod core;

/// Returns the current version of the `school-records` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
