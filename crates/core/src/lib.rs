// Core document types

pub mod caption;
pub mod document;

pub use document::{Document, DocumentId};
