//! Writer tests.
//!
//! Tests for emitting tokens as raws text.

use glossa_foundation::ErrorKind;
use glossa_raws::{RawsTokenizer, RawsWriter};

#[test]
fn written_tokens_read_back_in_order() {
    let mut writer = RawsWriter::new(Vec::new());
    writer.write_header("language_HUMAN").unwrap();
    writer.blank_line().unwrap();
    writer.write_token(0, &["TRANSLATION", "HUMAN"]).unwrap();
    writer.write_token(1, &["T_WORD", "AXE", "abo"]).unwrap();
    writer.write_token(1, &["T_WORD", "CAVE", ""]).unwrap();
    let out = writer.finish().unwrap();

    let tokens: Vec<_> = RawsTokenizer::new(out.as_slice())
        .map(|t| t.unwrap().into_fields())
        .collect();
    assert_eq!(
        tokens,
        [
            vec!["TRANSLATION", "HUMAN"],
            vec!["T_WORD", "AXE", "abo"],
            vec!["T_WORD", "CAVE", ""],
        ]
    );
}

#[test]
fn reserved_characters_are_malformed() {
    let mut writer = RawsWriter::new(Vec::new());
    for bad in ["a:b", "a]b", "a[b"] {
        let err = writer.write_token(0, &["WORD", bad]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::MalformedToken { .. }));
    }
    assert!(writer.finish().unwrap().is_empty());
}
