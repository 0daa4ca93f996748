//! Store types for UI state management

pub mod catalog;

pub use catalog::*;
