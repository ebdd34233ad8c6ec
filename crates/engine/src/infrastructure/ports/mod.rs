//! Port traits for infrastructure boundaries.
//!
//! Storage is the only abstraction in the engine; everything else is a
//! concrete type.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::CharacterStore;

#[cfg(test)]
pub use repos::MockCharacterStore;
