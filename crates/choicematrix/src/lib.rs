//! ChoiceMatrix - a decision-matrix resolver for data explorers
//!
//! An explorer page offers a handful of choice groups (country, metric,
//! interval, ...). Each combination of choices maps to one preset row of a
//! decision matrix, and each row names the chart configuration to display.
//! This crate parses that matrix, tracks the visitor's selection, and answers
//! which options remain reachable without contradicting the choices already
//! made.
//!
//! # Example
//!
//! ```
//! use choicematrix::DecisionMatrix;
//!
//! let mut matrix = DecisionMatrix::parse(
//!     "chartId,Gas Radio,Accounting Radio\n\
//!      488,CO2,Production-based\n\
//!      4331,CO2,Consumption-based\n\
//!      4147,GHGs,Production-based",
//! )
//! .unwrap();
//!
//! matrix.set_value("Gas", "GHGs");
//! assert_eq!(matrix.selected_row().unwrap().chart_id(), 4147);
//! assert!(!matrix.is_option_available("Accounting", "Consumption-based"));
//! ```

pub mod matrix;
pub mod program;
pub mod query;

#[cfg(test)]
mod matrix_tests;

// Core table and grammar types
pub use choicematrix_core::{
    required_chart_ids, ChoiceDescriptor, ChoiceKind, MatrixError, MatrixRow, MatrixTable,
    BOOLEAN_FALSE, BOOLEAN_TRUE, ID_COLUMN,
};

pub use matrix::{ChoiceWithAvailability, DecisionMatrix, OptionWithAvailability};
pub use program::{CellStatus, ExplorerProgram, ProgramKeyword};
pub use query::{from_query_str, to_query_str};
