//! Soul Core Engine library.
//!
//! HTTP service around the character sheet rules.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping the storage port
//! - `use_cases/` - User story orchestration across entities
//! - `infrastructure/` - Configuration, ports and storage adapters
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
