//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps the storage port for one record type and provides the
//! building blocks for use cases.

pub mod character;

pub use character::Character;
