//! Hex rendering of byte buffers for failure diagnostics

use core::fmt;

use alloc::string::String;

use pretty_hex::{HexConfig, PrettyHex};

/// Render a buffer as uppercase hex, two characters per byte and no separators.
///
/// ```
/// assert_eq!(microstrain_test::format_hex(&[0xAB, 0x01]), "AB01");
/// assert_eq!(microstrain_test::format_hex(&[]), "");
/// ```
pub fn format_hex(buffer: &[u8]) -> String {
    ::hex::encode_upper(buffer)
}

/// A borrowed buffer that displays as uppercase hex
///
/// `Display` produces the same text as [`format_hex`]. `Debug` produces a
/// multi-line hexdump with offsets and an ASCII column, which reads better for long buffers.
#[derive(Copy, Clone)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hex(self.0))
    }
}

impl fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = HexConfig {
            title: false,
            ..HexConfig::default()
        };
        // pretty-hex's Display is the single-line form; its Debug is the full dump
        write!(f, "{:?}", self.0.hex_conf(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn known_values() {
        assert_eq!(format_hex(&[0x00]), "00");
        assert_eq!(format_hex(&[0xFF]), "FF");
        assert_eq!(format_hex(&[0xAB, 0x01]), "AB01");
        assert_eq!(format_hex(&[0x01, 0x02, 0x03]), "010203");
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(format_hex(&[]), "");
        assert_eq!(format!("{}", Hex(&[])), "");
    }

    #[test]
    fn display_matches_format_hex() {
        let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x0A];
        assert_eq!(format!("{}", Hex(&data)), format_hex(&data));
    }

    #[test]
    fn debug_is_a_hexdump() {
        let dump = format!("{:?}", Hex(b"hello, device 0x75"));
        assert!(dump.starts_with("0000:"), "unexpected dump: {}", dump);
        assert!(dump.contains("68 65 6c 6c"), "unexpected dump: {}", dump);
        assert!(dump.contains("hello, device 0x"), "unexpected dump: {}", dump);
        assert!(dump.contains("\n0010:"), "unexpected dump: {}", dump);
    }
}
