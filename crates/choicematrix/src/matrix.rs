//! The decision-matrix resolver: selection state and option availability.
//!
//! One `DecisionMatrix` belongs to one configuration session. All queries are
//! pure functions of (table, selection), recomputed from scratch on demand;
//! table sizes are tens to low hundreds of rows, so the linear scans are
//! cheap and nothing is cached between calls.
//!
//! Matching rules, shared by every query:
//! - a blank row cell is a wildcard and matches any set value,
//! - an unset choice matches only blank cells,
//! - the column an availability query asks about must match exactly
//!   (the wildcard is disabled there).

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use choicematrix_core::{ChoiceKind, MatrixError, MatrixRow, MatrixTable};

use crate::query::to_query_str;

/// One option of a choice group, annotated for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionWithAvailability {
    /// The option label, as written in the matrix.
    pub value: String,
    /// Whether picking this option still leads to at least one row.
    pub available: bool,
    /// Whether this option is the group's resolved value.
    pub checked: bool,
}

/// One choice group, annotated for rendering.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceWithAvailability {
    /// Choice-group name.
    pub name: String,
    /// Control kind to render.
    pub kind: ChoiceKind,
    /// The group's resolved value; `None` when no option survives the
    /// constraints imposed by the other choices.
    pub value: Option<String>,
    /// Options in observed order.
    pub options: Vec<OptionWithAvailability>,
}

/// A column constraint used when scanning for matching rows.
///
/// `want: Some(v)` requires the cell to equal `v`, except that a blank cell
/// matches anything unless `exact` is set. `want: None` matches blank cells
/// only.
struct ColumnConstraint<'a> {
    group: &'a str,
    want: Option<&'a str>,
    exact: bool,
}

fn row_matches(row: &MatrixRow, constraints: &[ColumnConstraint<'_>]) -> bool {
    constraints.iter().all(|constraint| {
        match (constraint.want, row.value(constraint.group)) {
            (Some(want), Some(cell)) => cell == want,
            (Some(_), None) => !constraint.exact,
            (None, None) => true,
            (None, Some(_)) => false,
        }
    })
}

/// A parsed decision matrix plus the session's current selection.
#[derive(Debug, Clone)]
pub struct DecisionMatrix {
    table: MatrixTable,
    selection: IndexMap<String, String>,
}

impl DecisionMatrix {
    /// Parses matrix text and initializes the selection from the first row's
    /// non-blank cells.
    ///
    /// # Errors
    ///
    /// Propagates header errors from table parsing; see
    /// [`MatrixTable::parse`].
    pub fn parse(text: &str) -> Result<Self, MatrixError> {
        let table = MatrixTable::parse(text)?;
        let mut selection = IndexMap::new();
        if let Some(first) = table.rows().first() {
            for choice in table.choices() {
                if let Some(value) = first.value(choice.name()) {
                    selection.insert(choice.name().to_string(), value.to_string());
                }
            }
        }
        Ok(DecisionMatrix { table, selection })
    }

    /// The underlying immutable table.
    pub fn table(&self) -> &MatrixTable {
        &self.table
    }

    /// The raw current selection, in header order.
    pub fn selection(&self) -> &IndexMap<String, String> {
        &self.selection
    }

    /// Sets a choice to one of its observed options.
    ///
    /// Returns `false` without touching the selection when the group is
    /// unknown or the value was never observed in its column. Availability is
    /// deliberately not checked here: picking a currently-unavailable option
    /// is how a visitor pivots to a different region of the matrix.
    pub fn set_value(&mut self, group: &str, value: &str) -> bool {
        let legal = self.table.choice(group).is_some_and(|choice| choice.has_option(value));
        if !legal {
            debug!(event = "set_value_rejected", group, value);
            return false;
        }
        self.selection.insert(group.to_string(), value.to_string());
        true
    }

    /// Whether `value` remains reachable for `group` under the choices made
    /// in the groups *before* it, in header order.
    ///
    /// Only the prefix constrains availability so that a change high up
    /// (say, country) re-opens every group below it, instead of the stale
    /// lower choices vetoing each other. The queried column itself must
    /// match exactly; its blank cells do not count as offering the option.
    ///
    /// Forced groups (a single observed option) are always available.
    pub fn is_option_available(&self, group: &str, value: &str) -> bool {
        let Some(choice) = self.table.choice(group) else {
            return false;
        };
        if !choice.has_option(value) {
            return false;
        }
        if choice.is_forced() {
            return true;
        }

        let mut constraints = Vec::new();
        for prior in self.table.choices() {
            if prior.name() == group {
                break;
            }
            constraints.push(ColumnConstraint {
                group: prior.name(),
                want: self.selection.get(prior.name()).map(String::as_str),
                exact: false,
            });
        }
        constraints.push(ColumnConstraint { group, want: Some(value), exact: true });

        self.table.rows().iter().any(|row| row_matches(row, &constraints))
    }

    /// Resolves every group to a value consistent with the current selection.
    ///
    /// Per group: the selection's value if still available, else the first
    /// available option in observed order, else `None`. Group keys are never
    /// dropped, so serializing the result always lists every group.
    pub fn to_constrained_options(&self) -> IndexMap<String, Option<String>> {
        self.table
            .choices()
            .iter()
            .map(|choice| {
                let name = choice.name();
                let value = match self.selection.get(name) {
                    Some(current) if self.is_option_available(name, current) => {
                        Some(current.clone())
                    }
                    _ => choice
                        .options()
                        .find(|option| self.is_option_available(name, option))
                        .map(str::to_string),
                };
                (name.to_string(), value)
            })
            .collect()
    }

    /// The first row matching the constrained selection.
    ///
    /// When even the constrained selection matches nothing (possible when
    /// unset groups pin columns to blank cells), constraints are dropped from
    /// the last group backwards until a row matches; the first row is the
    /// final fallback. `None` only for an empty table.
    pub fn selected_row(&self) -> Option<&MatrixRow> {
        let constrained = self.to_constrained_options();
        for prefix in (1..=constrained.len()).rev() {
            let constraints: Vec<ColumnConstraint<'_>> = constrained
                .iter()
                .take(prefix)
                .map(|(group, want)| ColumnConstraint {
                    group,
                    want: want.as_deref(),
                    exact: false,
                })
                .collect();
            if let Some(row) =
                self.table.rows().iter().find(|row| row_matches(row, &constraints))
            {
                return Some(row);
            }
        }
        self.table.rows().first()
    }

    /// Every choice group annotated with availability and the resolved value,
    /// in header order. This is the payload a control panel renders from.
    pub fn choices_with_availability(&self) -> Vec<ChoiceWithAvailability> {
        let constrained = self.to_constrained_options();
        self.table
            .choices()
            .iter()
            .map(|choice| {
                let name = choice.name();
                let value = constrained.get(name).cloned().flatten();
                let options = choice
                    .options()
                    .map(|option| OptionWithAvailability {
                        value: option.to_string(),
                        available: self.is_option_available(name, option),
                        checked: Some(option) == value.as_deref(),
                    })
                    .collect();
                ChoiceWithAvailability {
                    name: name.to_string(),
                    kind: choice.kind(),
                    value,
                    options,
                }
            })
            .collect()
    }

    /// The current raw selection as a canonical query string, pairs in
    /// header order regardless of the order choices were set in.
    pub fn selection_as_query_str(&self) -> String {
        to_query_str(self.table.choices().iter().filter_map(|choice| {
            self.selection
                .get(choice.name())
                .map(|value| (choice.name(), value.as_str()))
        }))
    }

    /// One canonical query string per row: the row's non-blank choice cells
    /// in header order. Rows are the enumerable configurations, so this is
    /// the full reachable set (used to pre-bake one page per preset).
    pub fn all_options_as_query_strings(&self) -> Vec<String> {
        self.table
            .rows()
            .iter()
            .map(|row| {
                to_query_str(
                    self.table
                        .choices()
                        .iter()
                        .filter_map(|choice| {
                            row.value(choice.name()).map(|value| (choice.name(), value))
                        }),
                )
            })
            .collect()
    }
}
