//! Raw tokens.

use std::fmt;

/// One bracketed segment, split on `:`.
///
/// A token always has at least one field; the first is its kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    fields: Vec<String>,
    ordinal: usize,
}

impl Token {
    /// Builds a token from its fields and its 1-based position in the stream.
    ///
    /// An empty field list is normalised to a single empty field, matching
    /// what the tokenizer yields for `[]`.
    #[must_use]
    pub fn new(mut fields: Vec<String>, ordinal: usize) -> Self {
        if fields.is_empty() {
            fields.push(String::new());
        }
        Self { fields, ordinal }
    }

    /// Splits the text between brackets into a token.
    #[must_use]
    pub fn parse(inner: &str, ordinal: usize) -> Self {
        Self::new(inner.split(':').map(str::to_string).collect(), ordinal)
    }

    /// The token kind (its first field).
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.fields[0]
    }

    /// All fields, including the kind.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Fields after the kind.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.fields[1..]
    }

    /// Number of fields after the kind.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.fields.len() - 1
    }

    /// Returns field `index`, where 0 is the kind.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// 1-based position of this token in its stream.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Consumes the token, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(":"))
    }
}
