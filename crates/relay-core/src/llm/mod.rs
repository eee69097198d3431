//! Generation provider abstractions.
//!
//! - `GenerationProvider`: RPITIT trait for concrete provider implementations
//! - `BoxGenerationProvider`: object-safe wrapper for dynamic dispatch

pub mod box_provider;
pub mod provider;
