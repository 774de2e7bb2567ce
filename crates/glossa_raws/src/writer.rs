//! Writes tokens back out as raws text.

use std::io::Write;

use glossa_foundation::{Error, Result};

/// Emits one token per line, indented with tabs.
///
/// Fields are written verbatim, so a field containing `:`, `[` or `]` could
/// not be read back and is rejected.
pub struct RawsWriter<W> {
    out: W,
}

impl<W: Write> RawsWriter<W> {
    /// Creates a writer over the given sink.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes a free-text line. Tokenizers skip it.
    ///
    /// # Errors
    /// Returns a malformed token error if the text contains a bracket,
    /// or a stream error if the sink fails.
    pub fn write_header(&mut self, text: &str) -> Result<()> {
        if text.contains(['[', ']']) {
            return Err(Error::malformed_token(
                text,
                "header text cannot contain brackets",
            ));
        }
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Writes `[f0:f1:...]` on its own line after `depth` tabs.
    ///
    /// # Errors
    /// Returns a malformed token error if any field contains a reserved
    /// character, or a stream error if the sink fails.
    pub fn write_token<S: AsRef<str>>(&mut self, depth: usize, fields: &[S]) -> Result<()> {
        if let Some(bad) = fields
            .iter()
            .map(AsRef::as_ref)
            .find(|f| f.contains([':', '[', ']']))
        {
            return Err(Error::malformed_token(
                bad,
                "field contains a reserved character",
            ));
        }

        for _ in 0..depth {
            self.out.write_all(b"\t")?;
        }
        self.out.write_all(b"[")?;
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.out.write_all(b":")?;
            }
            self.out.write_all(field.as_ref().as_bytes())?;
        }
        self.out.write_all(b"]\n")?;
        Ok(())
    }

    /// Writes a blank separator line.
    ///
    /// # Errors
    /// Returns a stream error if the sink fails.
    pub fn blank_line(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    /// Flushes and returns the sink.
    ///
    /// # Errors
    /// Returns a stream error if flushing fails.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
