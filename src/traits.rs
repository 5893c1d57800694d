//! Traits for reading and writing the source translation document.

use std::io::{BufRead, Cursor, Write};

use crate::error::Error;

/// A document that can be parsed from, and written back to, its textual form.
///
/// Callers own the files: the crate only ever sees readers, writers and strings.
///
/// # Example
///
/// ```rust
/// use translator::{TranslationList, traits::Parser};
///
/// let list = TranslationList::from_str(r#"<root><data key="Back"><value lang="en-us">Back</value></data></root>"#)?;
/// let mut out = Vec::new();
/// list.to_writer(&mut out)?;
/// # Ok::<(), translator::Error>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes))
    }
}
