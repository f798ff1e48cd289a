//! `phonehub-recommend`
//!
//! **Responsibility:** turn a catalog and a [`Query`] into ranked, explained
//! recommendations.
//!
//! Everything here is a pure function over in-memory data:
//! - it never mutates the catalog,
//! - it never touches session state (see `phonehub-session`),
//! - an empty result is a normal value, not an error.

pub mod compare;
pub mod engine;
pub mod explain;
pub mod query;
pub mod search;
pub mod usage;

pub use compare::{
    build_table, pick_for_comparison, Candidate, Comparable, ComparisonRow, MAX_COMPARED,
    NOT_AVAILABLE,
};
pub use engine::{recommend, score, ScoredItem};
pub use explain::{explain, Reason, ReasonKind};
pub use query::{BrandFilter, Query};
pub use search::{is_blank, search};
pub use usage::{PrimaryUse, Weights};
