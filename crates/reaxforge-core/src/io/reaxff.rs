use super::traits::ParameterFile;
use crate::format::parser::{self, ParseError};
use crate::format::writer::{self, FormatError};
use crate::model::document::ForceFieldDocument;
use std::io::{self, BufRead, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, instrument};

#[derive(Debug, Error)]
pub enum ReaxffError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// The ReaxFF fixed-layout parameter-file format.
pub struct ReaxffFile;

impl ParameterFile for ReaxffFile {
    type Error = ReaxffError;

    fn read_from(reader: &mut impl BufRead) -> Result<ForceFieldDocument, Self::Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let document = parser::parse(&text)?;
        debug!(bytes = text.len(), "parsed ReaxFF parameter document");
        Ok(document)
    }

    fn write_to(
        document: &ForceFieldDocument,
        out: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let rendered = writer::format(document)?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        debug!(bytes = rendered.len(), "wrote formatted ReaxFF document");
        Ok(())
    }

    // Renders before touching the path, so a formatting error cannot
    // truncate an existing file.
    fn write_to_path<P: AsRef<Path>>(
        document: &ForceFieldDocument,
        path: P,
    ) -> Result<(), Self::Error> {
        let rendered = writer::format(document)?;
        std::fs::write(path, rendered.as_bytes())?;
        Ok(())
    }
}

impl ForceFieldDocument {
    /// Reads and parses a ReaxFF parameter file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReaxffError> {
        ReaxffFile::read_from_path(path)
    }
}

/// Writes a document's fixed-width rendition to `output_path`, overwriting
/// any existing content.
pub fn write_formatted<P: AsRef<Path>>(
    document: &ForceFieldDocument,
    output_path: P,
) -> Result<(), ReaxffError> {
    ReaxffFile::write_to_path(document, output_path)
}

/// Parses a parameter file and writes its fixed-width rendition to `output`.
#[instrument(skip_all, name = "normalize_forcefield")]
pub fn normalize_file<P, Q>(input: P, output: Q) -> Result<(), ReaxffError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    info!(
        input = %input.as_ref().display(),
        output = %output.as_ref().display(),
        "normalizing ReaxFF parameter file"
    );
    let document = ReaxffFile::read_from_path(input)?;
    ReaxffFile::write_to_path(&document, output)
}
