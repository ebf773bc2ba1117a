//! Best-effort text decoding.

/// Decode bytes as UTF-8, dropping invalid sequences.
///
/// This is the crate's named decoding policy for plain-text attachments:
/// every valid UTF-8 run is kept and every invalid sequence is skipped
/// outright, so decoding never fails and never inserts replacement
/// characters.
pub fn decode_utf8_dropping(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_passes_through() {
        assert_eq!(decode_utf8_dropping("héllo wörld".as_bytes()), "héllo wörld");
    }

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let bytes = b"a,b\xFF\xFEc\n1,2";
        assert_eq!(decode_utf8_dropping(bytes), "a,bc\n1,2");
    }

    #[test]
    fn test_truncated_multibyte_sequence_is_dropped() {
        // First two bytes of a three-byte sequence, then ASCII.
        let bytes = b"\xE2\x82abc";
        assert_eq!(decode_utf8_dropping(bytes), "abc");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_utf8_dropping(b""), "");
    }
}
