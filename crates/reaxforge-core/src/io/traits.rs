use crate::model::document::ForceFieldDocument;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing force-field parameter files.
///
/// This trait provides a common API for parameter-file I/O, keeping the text
/// codec independent of where the bytes come from or go to. Implementors
/// handle format-specific parsing and serialization.
pub trait ParameterFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a parameter document from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the text is structurally
    /// malformed.
    fn read_from(reader: &mut impl BufRead) -> Result<ForceFieldDocument, Self::Error>;

    /// Writes a parameter document to a writer.
    ///
    /// The document is rendered in full before anything is written, so a
    /// formatting error produces no output at all.
    ///
    /// # Errors
    ///
    /// Returns an error if a value fails numeric conversion during
    /// formatting or the write itself fails.
    fn write_to(
        document: &ForceFieldDocument,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads a parameter document from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<ForceFieldDocument, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a parameter document to a file path, replacing any existing
    /// content.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting fails or the path is unwritable.
    fn write_to_path<P: AsRef<Path>>(
        document: &ForceFieldDocument,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(document, &mut writer)
    }
}
