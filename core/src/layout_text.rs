//! Report layout text decoding.
//!
//! Layout parts are stored as fixed-width UTF-16LE code units with an
//! optional leading byte-order mark. Decoding is a pure function of the byte
//! buffer; a truncated (odd-length) buffer is reported, never repaired.

use thiserror::Error;

use crate::error_codes;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("layout text has odd byte length {len}; buffer is truncated")]
    OddByteLength { len: usize },
    #[error("layout text contains an invalid UTF-16 code unit sequence")]
    InvalidCodeUnits,
}

impl DecodeError {
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::OddByteLength { .. } => error_codes::DECODE_ODD_LENGTH,
            DecodeError::InvalidCodeUnits => error_codes::DECODE_INVALID_UNITS,
        }
    }
}

const BOM_LE: [u8; 2] = [0xFF, 0xFE];

pub fn decode_layout_text(bytes: &[u8]) -> Result<String, DecodeError> {
    let body = bytes.strip_prefix(&BOM_LE).unwrap_or(bytes);
    if body.len() % 2 != 0 {
        return Err(DecodeError::OddByteLength { len: bytes.len() });
    }

    let mut code_units = Vec::with_capacity(body.len() / 2);
    for chunk in body.chunks_exact(2) {
        code_units.push(u16::from_le_bytes([chunk[0], chunk[1]]));
    }

    String::from_utf16(&code_units).map_err(|_| DecodeError::InvalidCodeUnits)
}

#[cfg(test)]
mod tests {
    use super::{DecodeError, decode_layout_text};

    fn encode_utf16le(text: &str, with_bom: bool) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 + text.len() * 2);
        if with_bom {
            bytes.extend_from_slice(&[0xFF, 0xFE]);
        }
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn decodes_with_bom() {
        let bytes = encode_utf16le(r#"{"sections":[]}"#, true);
        let text = decode_layout_text(&bytes).expect("BOM-prefixed text should decode");
        assert_eq!(text, r#"{"sections":[]}"#);
    }

    #[test]
    fn decodes_without_bom() {
        let bytes = encode_utf16le(r#"{"sections":[]}"#, false);
        let text = decode_layout_text(&bytes).expect("bare text should decode");
        assert_eq!(text, r#"{"sections":[]}"#);
    }

    #[test]
    fn decodes_non_ascii_display_names() {
        let bytes = encode_utf16le("Übersicht 概要", true);
        let text = decode_layout_text(&bytes).expect("non-ASCII text should decode");
        assert_eq!(text, "Übersicht 概要");
    }

    #[test]
    fn odd_byte_length_is_rejected() {
        let mut bytes = encode_utf16le("{}", true);
        bytes.push(0x7B);
        let err = decode_layout_text(&bytes).expect_err("odd length must fail");
        assert!(matches!(err, DecodeError::OddByteLength { len } if len == bytes.len()));
    }

    #[test]
    fn unpaired_surrogate_is_rejected() {
        let mut bytes = vec![0xFF, 0xFE];
        bytes.extend_from_slice(&0xD800u16.to_le_bytes());
        let err = decode_layout_text(&bytes).expect_err("lone surrogate must fail");
        assert!(matches!(err, DecodeError::InvalidCodeUnits));
    }

    #[test]
    fn empty_buffer_decodes_to_empty_text() {
        assert_eq!(decode_layout_text(&[]).expect("empty buffer is valid"), "");
        assert_eq!(
            decode_layout_text(&[0xFF, 0xFE]).expect("BOM-only buffer is valid"),
            ""
        );
    }
}
