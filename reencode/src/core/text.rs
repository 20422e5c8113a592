//! UTF-8 decoding rules applied before a file is written back.

use std::string::FromUtf8Error;

/// Byte-order mark some editors prepend to UTF-8 files.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode file bytes as strict UTF-8.
///
/// With `strip_bom`, a single leading BOM is dropped so the text written back is
/// the canonical form. Invalid UTF-8 is an error, never replaced.
pub fn decode_utf8(mut bytes: Vec<u8>, strip_bom: bool) -> Result<String, FromUtf8Error> {
    if strip_bom && bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    String::from_utf8(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_text() {
        let text = decode_utf8("café".as_bytes().to_vec(), true).expect("decode");
        assert_eq!(text, "café");
    }

    #[test]
    fn strips_leading_bom_when_enabled() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("naïve".as_bytes());
        assert_eq!(decode_utf8(bytes.clone(), true).expect("decode"), "naïve");
        assert_eq!(
            decode_utf8(bytes, false).expect("decode"),
            "\u{feff}naïve"
        );
    }

    #[test]
    fn strips_only_one_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(UTF8_BOM);
        let text = decode_utf8(bytes, true).expect("decode");
        assert_eq!(text, "\u{feff}");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = decode_utf8(vec![b'a', 0xff, 0xfe], true).expect_err("invalid");
        assert_eq!(err.utf8_error().valid_up_to(), 1);
    }

    #[test]
    fn empty_input_is_empty_text() {
        assert_eq!(decode_utf8(Vec::new(), true).expect("decode"), "");
    }
}
