use serde::{Deserialize, Serialize};
use std::fmt;

/// One tokenized line of a section, as whitespace-split string values.
///
/// Empty tokens are discarded during tokenization, so a blank input line
/// becomes an empty row. Rows are never type-coerced at parse time; numeric
/// conversion is deferred to the formatter.
pub type Row = Vec<String>;

/// Identifies one of the seven fixed top-level blocks of a ReaxFF file.
///
/// The variants are declared in file order, which is the only order in which
/// sections may appear. Each kind carries the fixed layout constants of its
/// block: the number of text lines per logical item (`mult`) and the number
/// of fixed leading integer fields on its data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionKind {
    /// Global scalar parameters, one value per line.
    General,
    /// Per-atom-type parameters, four lines per atom type.
    OneBody,
    /// Bond parameters, two lines per atom-type pair.
    TwoBody,
    /// Off-diagonal overrides for selected atom-type pairs.
    OffDiagonal,
    /// Valence-angle parameters, indexed by atom-type triples.
    ThreeBody,
    /// Torsion parameters, indexed by atom-type quadruples.
    FourBody,
    /// Hydrogen-bond parameters, indexed by atom-type triples.
    HydrogenBond,
}

impl SectionKind {
    /// All section kinds in the fixed order they appear in a file.
    pub const ALL: [SectionKind; 7] = [
        SectionKind::General,
        SectionKind::OneBody,
        SectionKind::TwoBody,
        SectionKind::OffDiagonal,
        SectionKind::ThreeBody,
        SectionKind::FourBody,
        SectionKind::HydrogenBond,
    ];

    /// The number of text lines per logical item within this section.
    pub const fn mult(self) -> usize {
        match self {
            SectionKind::OneBody => 4,
            SectionKind::TwoBody => 2,
            _ => 1,
        }
    }

    /// The number of preamble lines heading this section's block.
    ///
    /// The preamble is the count line plus `mult - 1` free-text description
    /// lines, so a block spans `mult * (n + 1)` lines in total for a
    /// declared item count of `n`.
    pub const fn preamble_rows(self) -> usize {
        self.mult()
    }

    /// The number of fixed leading atom-type indices on this section's data
    /// rows, or `None` where the data rows use their own template (the
    /// general value rows and the one-body element-label groups).
    pub const fn index_fields(self) -> Option<usize> {
        match self {
            SectionKind::General | SectionKind::OneBody => None,
            SectionKind::TwoBody | SectionKind::OffDiagonal => Some(2),
            SectionKind::ThreeBody | SectionKind::HydrogenBond => Some(3),
            SectionKind::FourBody => Some(4),
        }
    }

    /// A short human-readable name, used in error messages and logs.
    pub const fn label(self) -> &'static str {
        match self {
            SectionKind::General => "general",
            SectionKind::OneBody => "one-body",
            SectionKind::TwoBody => "two-body",
            SectionKind::OffDiagonal => "off-diagonal",
            SectionKind::ThreeBody => "three-body",
            SectionKind::FourBody => "four-body",
            SectionKind::HydrogenBond => "hydrogen-bond",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One parsed block of a ReaxFF file: its kind plus every row of the block
/// in file order, preamble rows first.
///
/// Row 0 is always the count line whose first token declares the number of
/// logical items in the block. The section stores the whole block verbatim
/// (as tokens), so re-formatting a document reconstructs the file
/// top-to-bottom without consulting anything outside the section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Which of the seven blocks this section is.
    pub kind: SectionKind,
    /// Every tokenized line of the block, preamble rows followed by data rows.
    pub rows: Vec<Row>,
}

impl Section {
    /// Creates a section from already-tokenized rows.
    pub fn new(kind: SectionKind, rows: Vec<Row>) -> Self {
        Self { kind, rows }
    }

    /// Creates an empty section of the given kind, with no rows at all.
    pub fn empty(kind: SectionKind) -> Self {
        Self { kind, rows: Vec::new() }
    }

    /// The item count declared on the count line, if present and numeric.
    pub fn declared_count(&self) -> Option<usize> {
        self.rows.first()?.first()?.parse().ok()
    }

    /// The preamble rows (count line plus description lines).
    pub fn preamble(&self) -> &[Row] {
        let end = self.kind.preamble_rows().min(self.rows.len());
        &self.rows[..end]
    }

    /// The data rows following the preamble.
    pub fn items(&self) -> &[Row] {
        let start = self.kind.preamble_rows().min(self.rows.len());
        &self.rows[start..]
    }
}
