//! ChoiceMatrix Core - Table model and grammar for decision matrices
//!
//! This crate provides the parse-time half of the decision-matrix system:
//! - Grammar constants and header-cell parsing
//! - Choice-group descriptors with kind inference
//! - The immutable matrix table parsed from delimited text
//! - Error types

pub mod choice;
pub mod error;
pub mod grammar;
pub mod table;


pub use choice::{ChoiceDescriptor, ChoiceKind};
pub use error::{MatrixError, Result};
pub use grammar::{BOOLEAN_FALSE, BOOLEAN_TRUE, ID_COLUMN};
pub use table::{required_chart_ids, MatrixRow, MatrixTable};
