//! Export of ranked recommendations as downloadable documents.
//!
//! The exported fields are fixed: name, price, the four capability scores,
//! brand, storage and RAM, in that order. Only the document format varies.

pub mod format;
pub mod record;

pub use format::{export, file_name, ExportError, ExportFormat, ExportedFile};
pub use record::ExportRecord;
