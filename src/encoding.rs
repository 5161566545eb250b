use std::borrow::Cow;

use encoding_rs::{Encoding, GB18030, UTF_8};

/// Decode raw novel bytes to text, resolving the encoding as a side effect.
///
/// This function:
/// 1. Honors a byte-order mark (UTF-8, UTF-16LE, UTF-16BE) and strips it
/// 2. Otherwise decodes as UTF-8 when the bytes are well-formed
/// 3. Falls back to GB18030 with lossy replacement (common in Chinese
///    novel archives)
///
/// Detection never fails; the fallback replaces undecodable bytes instead
/// of aborting. Returns the decoded text and the encoding actually used.
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text(bytes: &[u8]) -> (Cow<'_, str>, &'static Encoding) {
    // UTF_8.decode() sniffs the BOM itself and switches to UTF-16 when
    // one is present.
    let (text, encoding, malformed) = UTF_8.decode(bytes);
    if !malformed {
        return (text, encoding);
    }

    let (text, encoding, _) = GB18030.decode(bytes);
    (text, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8_passthrough() {
        let (text, encoding) = decode_text("第一章 开端".as_bytes());
        assert_eq!(text, "第一章 开端");
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("hello".as_bytes());
        let (text, encoding) = decode_text(&bytes);
        assert_eq!(text, "hello");
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn test_utf16le_bom_honored() {
        let bytes = [0xFF, 0xFE, 0x68, 0x00, 0x69, 0x00];
        let (text, encoding) = decode_text(&bytes);
        assert_eq!(text, "hi");
        assert_eq!(encoding, encoding_rs::UTF_16LE);
    }

    #[test]
    fn test_gb18030_fallback() {
        let (bytes, _, _) = GB18030.encode("第一章 正文");
        let (text, encoding) = decode_text(&bytes);
        assert_eq!(text, "第一章 正文");
        assert_eq!(encoding, GB18030);
    }

    #[test]
    fn test_empty_input() {
        let (text, encoding) = decode_text(&[]);
        assert_eq!(text, "");
        assert_eq!(encoding, UTF_8);
    }
}
