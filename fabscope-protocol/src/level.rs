//! Trigger level digit codec
//!
//! The level travels as exactly three ASCII decimal digits, most
//! significant first (`"007"`, `"128"`, `"255"`).

/// Number of digit bytes following a trigger command
pub const TRIGGER_DIGITS: usize = 3;

/// Decode three digit bytes into a duty value
///
/// Arithmetic is 8-bit and wrapping, and the digits are not validated:
/// `"300"` yields 44 and non-digit bytes yield some value in 0..=255.
/// Neither case panics.
pub fn decode_level(digits: [u8; TRIGGER_DIGITS]) -> u8 {
    let [hundreds, tens, units] = digits;
    digit(hundreds)
        .wrapping_mul(100)
        .wrapping_add(digit(tens).wrapping_mul(10))
        .wrapping_add(digit(units))
}

/// Encode a duty value as three zero-padded digit bytes
pub fn encode_level(level: u8) -> [u8; TRIGGER_DIGITS] {
    [
        b'0' + level / 100,
        b'0' + (level / 10) % 10,
        b'0' + level % 10,
    ]
}

#[inline]
fn digit(byte: u8) -> u8 {
    byte.wrapping_sub(b'0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_padded() {
        assert_eq!(decode_level(*b"007"), 7);
        assert_eq!(decode_level(*b"128"), 128);
        assert_eq!(decode_level(*b"255"), 255);
        assert_eq!(decode_level(*b"000"), 0);
    }

    #[test]
    fn test_decode_out_of_range_wraps() {
        // 256 and 300 do not fit in the duty register
        assert_eq!(decode_level(*b"256"), 0);
        assert_eq!(decode_level(*b"300"), 44);
    }

    #[test]
    fn test_encode() {
        assert_eq!(&encode_level(7), b"007");
        assert_eq!(&encode_level(42), b"042");
        assert_eq!(&encode_level(255), b"255");
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(level: u8) {
            prop_assert_eq!(decode_level(encode_level(level)), level);
        }

        #[test]
        fn prop_decode_never_panics(digits: [u8; 3]) {
            let _ = decode_level(digits);
        }
    }
}
