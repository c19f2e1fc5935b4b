use super::section::{Section, SectionKind};
use serde::{Deserialize, Serialize};

/// An entire parsed ReaxFF parameter file.
///
/// The document owns the verbatim header line and the seven sections in file
/// order. Sections are positional: their order, not any cross-reference,
/// reconstructs the file top-to-bottom. A document is produced once by the
/// parser and is otherwise inert; callers may mutate individual rows before
/// handing it back to the formatter.
///
/// Documents are not synchronized; sharing one across threads requires
/// external locking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForceFieldDocument {
    /// The first line of the file, byte-identical to the input (without its
    /// trailing newline). Never tokenized or reflowed.
    pub header: String,
    /// Global scalar parameters.
    pub general: Section,
    /// Per-atom-type parameters (four lines per atom type).
    pub onebody: Section,
    /// Bond parameters (two lines per atom-type pair).
    pub twobody: Section,
    /// Off-diagonal pair overrides.
    pub offdiagonal: Section,
    /// Valence-angle parameters.
    pub threebody: Section,
    /// Torsion parameters.
    pub fourbody: Section,
    /// Hydrogen-bond parameters.
    pub hbond: Section,
}

impl Default for ForceFieldDocument {
    fn default() -> Self {
        Self::empty()
    }
}

impl ForceFieldDocument {
    /// Creates a document with an empty header and seven empty sections.
    ///
    /// Formatting an empty document yields only the (empty) header line; it
    /// is the caller's responsibility to populate the sections first.
    pub fn empty() -> Self {
        Self {
            header: String::new(),
            general: Section::empty(SectionKind::General),
            onebody: Section::empty(SectionKind::OneBody),
            twobody: Section::empty(SectionKind::TwoBody),
            offdiagonal: Section::empty(SectionKind::OffDiagonal),
            threebody: Section::empty(SectionKind::ThreeBody),
            fourbody: Section::empty(SectionKind::FourBody),
            hbond: Section::empty(SectionKind::HydrogenBond),
        }
    }

    /// Returns the section for the given kind.
    pub fn section(&self, kind: SectionKind) -> &Section {
        match kind {
            SectionKind::General => &self.general,
            SectionKind::OneBody => &self.onebody,
            SectionKind::TwoBody => &self.twobody,
            SectionKind::OffDiagonal => &self.offdiagonal,
            SectionKind::ThreeBody => &self.threebody,
            SectionKind::FourBody => &self.fourbody,
            SectionKind::HydrogenBond => &self.hbond,
        }
    }

    /// Returns the section for the given kind, mutably.
    pub fn section_mut(&mut self, kind: SectionKind) -> &mut Section {
        match kind {
            SectionKind::General => &mut self.general,
            SectionKind::OneBody => &mut self.onebody,
            SectionKind::TwoBody => &mut self.twobody,
            SectionKind::OffDiagonal => &mut self.offdiagonal,
            SectionKind::ThreeBody => &mut self.threebody,
            SectionKind::FourBody => &mut self.fourbody,
            SectionKind::HydrogenBond => &mut self.hbond,
        }
    }

    /// Iterates over the seven sections in file order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        SectionKind::ALL.iter().map(|kind| self.section(*kind))
    }
}
