//! Catalog domain module.
//!
//! The catalog is an immutable, ordered collection of phones supplied by a
//! loader. Validation happens once, at load time; everything downstream assumes
//! every entry carries a name, a price and four capability scores in `[0, 100]`.

pub mod catalog;
pub mod error;
pub mod item;

pub use catalog::{BrandCount, Catalog, ANY_BRAND};
pub use error::CatalogError;
pub use item::{Capability, Item, MAX_CAPABILITY_SCORE};
