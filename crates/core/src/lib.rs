//! `phonehub-core` — shared domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{FeedbackId, SessionId};
pub use value_object::ValueObject;
