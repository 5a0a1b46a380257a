//! `restock-core`: shared building blocks for the transfer planner.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::RunId;
pub use value_object::ValueObject;
