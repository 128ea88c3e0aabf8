//! Explorer program files: keyword statements plus indented blocks.
//!
//! An explorer page is configured by a small line-oriented program:
//!
//! ```text
//! title\tCO2 Data Explorer
//! isPublished\ttrue
//! switcher
//! \tchartId\tGas Radio
//! \t488\tCO2
//! ```
//!
//! Top-level lines are `keyword<TAB>value` statements. A block keyword
//! (`switcher`) has no inline value; its body is the following run of
//! tab-indented lines, with one level of indentation stripped. Blank lines
//! never close a block. Unknown keywords are kept in the source and surface
//! through [`ExplorerProgram::get_cell`] so an editor can flag them without
//! the parser rejecting the whole program.

use choicematrix_core::{required_chart_ids, BOOLEAN_TRUE};

/// The keywords an explorer program understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramKeyword {
    /// Page title.
    Title,
    /// Page subtitle.
    Subtitle,
    /// Whether the page is live (`true`/`false`).
    IsPublished,
    /// Query string selecting the view shown on first load.
    DefaultView,
    /// Decision-matrix block.
    Switcher,
}

impl ProgramKeyword {
    /// All keywords, in documentation order.
    pub const ALL: [ProgramKeyword; 5] = [
        ProgramKeyword::Title,
        ProgramKeyword::Subtitle,
        ProgramKeyword::IsPublished,
        ProgramKeyword::DefaultView,
        ProgramKeyword::Switcher,
    ];

    /// The keyword as written in program source.
    pub fn as_str(self) -> &'static str {
        match self {
            ProgramKeyword::Title => "title",
            ProgramKeyword::Subtitle => "subtitle",
            ProgramKeyword::IsPublished => "isPublished",
            ProgramKeyword::DefaultView => "defaultView",
            ProgramKeyword::Switcher => "switcher",
        }
    }

    /// Parses a source cell into a keyword.
    pub fn parse(cell: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.as_str() == cell)
    }

    /// Block keywords take their value from the indented lines that follow.
    pub fn is_block(self) -> bool {
        matches!(self, ProgramKeyword::Switcher)
    }
}

/// Validation result for one source cell, for editor tooling.
#[derive(Debug, Clone)]
pub struct CellStatus {
    /// The cell text, empty when the address is out of range.
    pub value: String,
    /// Whether the cell is acceptable where it stands.
    pub is_valid: bool,
    /// Autocomplete suggestions when it is not.
    pub suggestions: Vec<String>,
}

/// A parsed explorer program.
#[derive(Debug, Clone)]
pub struct ExplorerProgram {
    slug: String,
    source: String,
    title: Option<String>,
    subtitle: Option<String>,
    is_published: bool,
    default_view: Option<String>,
    switcher_code: Option<String>,
}

impl ExplorerProgram {
    /// Parses program text. Parsing is total: unknown keywords and stray
    /// indented lines are skipped, not rejected.
    pub fn new(slug: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let mut program = ExplorerProgram {
            slug: slug.into(),
            source: String::new(),
            title: None,
            subtitle: None,
            is_published: false,
            default_view: None,
            switcher_code: None,
        };

        let lines: Vec<&str> = source.lines().collect();
        let mut index = 0;
        while index < lines.len() {
            let line = lines[index];
            index += 1;
            if line.trim().is_empty() || line.starts_with('\t') {
                continue;
            }

            let (head, value) = match line.split_once('\t') {
                Some((head, rest)) => (head, rest.trim()),
                None => (line, ""),
            };
            let Some(keyword) = ProgramKeyword::parse(head) else {
                continue;
            };

            if keyword.is_block() {
                let mut body = Vec::new();
                while index < lines.len() {
                    let block_line = lines[index];
                    if !block_line.starts_with('\t') && !block_line.trim().is_empty() {
                        break;
                    }
                    body.push(block_line.strip_prefix('\t').unwrap_or(block_line));
                    index += 1;
                }
                program.set_block(keyword, body.join("\n"));
            } else {
                program.set_statement(keyword, value);
            }
        }

        program.source = source;
        program
    }

    fn set_statement(&mut self, keyword: ProgramKeyword, value: &str) {
        match keyword {
            ProgramKeyword::Title => self.title = Some(value.to_string()),
            ProgramKeyword::Subtitle => self.subtitle = Some(value.to_string()),
            ProgramKeyword::IsPublished => self.is_published = value == BOOLEAN_TRUE,
            ProgramKeyword::DefaultView => self.default_view = Some(value.to_string()),
            ProgramKeyword::Switcher => {}
        }
    }

    fn set_block(&mut self, keyword: ProgramKeyword, body: String) {
        if keyword == ProgramKeyword::Switcher {
            self.switcher_code = Some(body);
        }
    }

    /// The program's URL slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The raw program source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Page title, if declared.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Page subtitle, if declared.
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Whether the program declares itself published.
    pub fn is_published(&self) -> bool {
        self.is_published
    }

    /// Query string of the view to show on first load, if declared.
    pub fn default_view(&self) -> Option<&str> {
        self.default_view.as_deref()
    }

    /// The decision-matrix source from the `switcher` block, if present.
    pub fn decision_matrix_code(&self) -> Option<&str> {
        self.switcher_code.as_deref()
    }

    /// Ordered chart ids the program's matrix refers to, for prefetching.
    pub fn required_chart_ids(&self) -> Vec<i64> {
        self.switcher_code.as_deref().map(required_chart_ids).unwrap_or_default()
    }

    /// Validates the cell at (row, col) in the raw source.
    ///
    /// Column 0 of a top-level line must be a known keyword; invalid cells
    /// carry the keyword list as suggestions. Block content and value cells
    /// are not validated here (the matrix parser owns the block's rules).
    /// Out-of-range addresses report an empty, valid cell.
    pub fn get_cell(&self, row: usize, col: usize) -> CellStatus {
        let Some(line) = self.source.lines().nth(row) else {
            return CellStatus { value: String::new(), is_valid: true, suggestions: Vec::new() };
        };
        let cells: Vec<&str> = line.split('\t').collect();
        let value = cells.get(col).copied().unwrap_or_default().to_string();

        let needs_keyword =
            col == 0 && !line.starts_with('\t') && !line.trim().is_empty();
        let is_valid = !needs_keyword || ProgramKeyword::parse(&value).is_some();
        let suggestions = if is_valid {
            Vec::new()
        } else {
            ProgramKeyword::ALL.iter().map(|keyword| keyword.as_str().to_string()).collect()
        };
        CellStatus { value, is_valid, suggestions }
    }
}
