//! Choice-group descriptors.
//!
//! A choice group is one axis of configuration: a named column whose distinct
//! cell values form its ordered option set. Descriptors are built once at
//! parse time and never change afterwards.

use indexmap::IndexSet;
use serde::Serialize;

use crate::grammar::{BOOLEAN_FALSE, BOOLEAN_TRUE};

/// Rendering kind of a choice group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChoiceKind {
    /// Single-select radio group.
    Radio,

    /// Boolean toggle (exactly the `true`/`false` option set).
    Checkbox,

    /// Single-select dropdown, for groups with many options.
    Dropdown,
}

impl ChoiceKind {
    /// Maps an explicit header keyword to a kind.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "Radio" => Some(ChoiceKind::Radio),
            "Checkbox" => Some(ChoiceKind::Checkbox),
            "Dropdown" => Some(ChoiceKind::Dropdown),
            _ => None,
        }
    }
}

/// Immutable descriptor of one choice group.
#[derive(Debug, Clone)]
pub struct ChoiceDescriptor {
    name: String,
    kind: ChoiceKind,
    options: IndexSet<String>,
}

impl ChoiceDescriptor {
    /// Builds a descriptor from the observed option set, inferring the kind
    /// when the header carried no explicit one.
    pub fn new(name: String, explicit_kind: Option<ChoiceKind>, options: IndexSet<String>) -> Self {
        let kind = explicit_kind.unwrap_or_else(|| infer_kind(&options));
        ChoiceDescriptor { name, kind, options }
    }

    /// The choice-group name, as written in the header (kind suffix stripped).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rendering kind.
    pub fn kind(&self) -> ChoiceKind {
        self.kind
    }

    /// Distinct option values in first-occurrence order.
    pub fn options(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    /// Number of distinct observed options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Whether `value` was observed in this group's column.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.contains(value)
    }

    /// A group with a single observed option is forced: it is always shown
    /// as available and checked, whatever the rest of the selection says.
    pub fn is_forced(&self) -> bool {
        self.options.len() == 1
    }
}

/// Infers the control kind from the observed option set: exactly the boolean
/// literal pair means a toggle, everything else is a radio group.
fn infer_kind(options: &IndexSet<String>) -> ChoiceKind {
    let is_boolean = options.len() == 2
        && options
            .iter()
            .all(|o| o.eq_ignore_ascii_case(BOOLEAN_TRUE) || o.eq_ignore_ascii_case(BOOLEAN_FALSE));
    if is_boolean {
        ChoiceKind::Checkbox
    } else {
        ChoiceKind::Radio
    }
}
