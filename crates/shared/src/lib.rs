//! Soul Core Shared - the wire contract between the engine and its clients
//!
//! - Record validation of raw JSON into domain sheets
//! - Canonical and legacy import/export documents
//! - Request and response bodies
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only the domain, serde, serde_json, and thiserror
//! 2. **No I/O** - Pure data types, parsing, and serialization

pub mod document;
pub mod legacy;
pub mod requests;
pub mod responses;
pub mod validation;

pub use document::{
    export_character, export_file_name, export_legacy, import_character, DocumentFormat,
};
pub use legacy::LegacyCharacterDocument;
pub use requests::{DamageRequest, ExportFormat, ExportQuery};
pub use responses::{
    rank_table, DamageResponse, ErrorResponse, ProficiencyEntry, RankDiceEntry, RulesResponse,
    SheetResponse,
};
pub use validation::{validate, validate_with_policy, ValidationError};
