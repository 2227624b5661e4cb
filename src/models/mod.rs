//! PokeAPI response models
//!
//! This module defines the DTOs deserialized from PokeAPI JSON bodies. The
//! cache never sees these types; it only stores the raw bytes they came from.

pub mod location;

// Re-export commonly used types
pub use location::{LocationAreaPage, NamedResource};
