//! Tokenizer tests.
//!
//! Tests for turning raw text into token field lists.

use std::io::{self, BufRead, BufReader, Read};

use glossa_foundation::ErrorKind;
use glossa_raws::RawsTokenizer;

fn fields(input: &str) -> Vec<Vec<String>> {
    RawsTokenizer::new(input.as_bytes())
        .map(|t| t.unwrap().into_fields())
        .collect()
}

#[test]
fn tokenize_raw_file_layout() {
    let input = "language_words\n\n[OBJECT:LANGUAGE]\n\n[WORD:AXE]\n\t[NOUN:axe:axes]\n\t\t[FRONT_COMPOUND_NOUN_SING]\n";
    let tokens = fields(input);

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0], ["OBJECT", "LANGUAGE"]);
    assert_eq!(tokens[2], ["NOUN", "axe", "axes"]);
    assert_eq!(tokens[3], ["FRONT_COMPOUND_NOUN_SING"]);
}

#[test]
fn tokenize_preserves_empty_fields() {
    assert_eq!(fields("[NOUN::scissors]"), [["NOUN", "", "scissors"]]);
    assert_eq!(fields("[VERB:a::c::]")[0].len(), 6);
}

#[test]
fn tokenize_empty_brackets() {
    assert_eq!(fields("[]"), [[""]]);
}

#[test]
fn tokenize_nested_open_bracket_is_field_text() {
    // Scanning for ']' does not look for another '['.
    assert_eq!(fields("[A:[B]"), [["A", "[B"]]);
}

#[test]
fn tokenize_non_ascii_fields() {
    assert_eq!(fields("[T_WORD:AXE:ùlol]"), [["T_WORD", "AXE", "ùlol"]]);
}

#[test]
fn reader_failure_surfaces_once() {
    // Fails once the buffered bytes run out.
    struct FailAfter<'a>(&'a [u8]);

    impl Read for FailAfter<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Err(io::Error::other("disconnected"));
            }
            let n = self.0.read(buf)?;
            Ok(n)
        }
    }

    let reader = BufReader::with_capacity(4, FailAfter(b"[WORD:AXE]"));
    let mut tokenizer = RawsTokenizer::new(reader);
    let first = tokenizer.next().unwrap().unwrap();
    assert_eq!(first.fields(), ["WORD", "AXE"]);

    let err = tokenizer.next().unwrap().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Stream(_)));
    assert!(tokenizer.next().is_none());
}

#[test]
fn tokenize_counts_tokens() {
    let mut tokenizer = RawsTokenizer::new("[A][B]".as_bytes());
    assert_eq!(tokenizer.tokens_read(), 0);
    tokenizer.next();
    tokenizer.next();
    assert!(tokenizer.next().is_none());
    assert_eq!(tokenizer.tokens_read(), 2);
}

#[test]
fn tokenize_any_bufread() {
    let reader: Box<dyn BufRead> = Box::new("[OBJECT]".as_bytes());
    assert_eq!(RawsTokenizer::new(reader).count(), 1);
}
