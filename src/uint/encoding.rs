//! Hexadecimal and byte encodings for [`BigUint`].
//!
//! The literal grammar is `0x` followed by hexadecimal digits (case-insensitive), with an
//! optional width tag `_bigN` stating the width the literal was written for, e.g.
//! `0x7fffffff_big31`.

use crate::{BigUint, Error, Limb, ParseError, Result, Word};
use core::{fmt, str::FromStr};

/// Decode a single ASCII hexadecimal digit.
const fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Parse the decimal width of a `_bigN` tag.
const fn parse_width_tag(tag: &[u8]) -> core::result::Result<u32, ParseError> {
    if tag.len() < 5 || tag[0] != b'_' || tag[1] != b'b' || tag[2] != b'i' || tag[3] != b'g' {
        return Err(ParseError::InvalidInput);
    }

    let mut width: u32 = 0;
    let mut i = 4;
    while i < tag.len() {
        let byte = tag[i];
        if !byte.is_ascii_digit() {
            return Err(ParseError::InvalidInput);
        }
        width = match width.checked_mul(10) {
            Some(w) => match w.checked_add((byte - b'0') as u32) {
                Some(w) => w,
                None => return Err(ParseError::OutsideRange),
            },
            None => return Err(ParseError::OutsideRange),
        };
        i += 1;
    }

    if width == 0 {
        return Err(ParseError::InvalidInput);
    }
    Ok(width)
}

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Parse a hexadecimal literal such as `"0x1ffff"` or `"0xdeadbeef_big32"`.
    ///
    /// Intended for constants: malformed or oversized literals are rejected at compile time when
    /// used in a `const` context.
    ///
    /// # Panics
    /// - if the literal is malformed
    /// - if the value does not fit in `BITS` bits or exceeds its `_bigN` tag
    #[must_use]
    pub const fn from_hex_literal(literal: &str) -> Self {
        match Self::parse_hex_literal(literal.as_bytes()) {
            Ok(value) => value,
            Err(ParseError::InvalidInput) => panic!("invalid hexadecimal literal"),
            Err(ParseError::OutsideRange) => panic!("hexadecimal literal does not fit"),
        }
    }

    /// Parse a hexadecimal literal, returning [`ParseError`] on failure.
    pub const fn parse_hex_literal(bytes: &[u8]) -> core::result::Result<Self, ParseError> {
        if bytes.len() < 3 || bytes[0] != b'0' || (bytes[1] != b'x' && bytes[1] != b'X') {
            return Err(ParseError::InvalidInput);
        }

        let mut end = 2;
        while end < bytes.len() && bytes[end] != b'_' {
            end += 1;
        }
        if end == 2 {
            return Err(ParseError::InvalidInput);
        }

        let width = if end < bytes.len() {
            let (_, tag) = bytes.split_at(end);
            match parse_width_tag(tag) {
                Ok(width) => width,
                Err(err) => return Err(err),
            }
        } else {
            BITS
        };

        let mut limbs = [Limb::ZERO; LIMBS];
        let mut overflow = false;
        let mut nibble = 0u32;
        let mut i = end;
        while i > 2 {
            i -= 1;
            let digit = match hex_digit(bytes[i]) {
                Some(digit) => digit,
                None => return Err(ParseError::InvalidInput),
            };

            if digit != 0 {
                let bit = nibble * 4;
                if bit >= LIMBS as u32 * Limb::BITS {
                    overflow = true;
                } else {
                    let limb = (bit / Limb::BITS) as usize;
                    limbs[limb].0 |= (digit as Word) << (bit % Limb::BITS);
                }
            }
            nibble += 1;
        }

        let value = Self { limbs };
        if overflow || Self::exceeds_width(&limbs) || value.bits() > width {
            return Err(ParseError::OutsideRange);
        }
        Ok(value)
    }

    /// Decode from little-endian bytes, returning [`Error::Overflow`] if the value does not fit
    /// in `BITS` bits.
    pub fn from_le_slice(bytes: &[u8]) -> Result<Self> {
        let mut limbs = [Limb::ZERO; LIMBS];
        for (i, &byte) in bytes.iter().enumerate() {
            let limb = i / Limb::BYTES;
            if limb >= LIMBS {
                if byte != 0 {
                    return Err(Error::Overflow);
                }
                continue;
            }
            limbs[limb].0 |= (byte as Word) << ((i % Limb::BYTES) * 8);
        }

        if Self::exceeds_width(&limbs) {
            return Err(Error::Overflow);
        }
        Ok(Self { limbs })
    }

    /// Write the minimal-length hexadecimal digits of this value.
    fn fmt_hex(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        let top = super::slice::significant_limbs(&self.limbs);
        if top == 0 {
            return f.write_str("0");
        }

        let width = Limb::BYTES * 2;
        for (i, limb) in self.limbs[..top].iter().enumerate().rev() {
            match (i + 1 == top, upper) {
                (true, false) => write!(f, "{:x}", limb.0)?,
                (true, true) => write!(f, "{:X}", limb.0)?,
                (false, false) => write!(f, "{:0width$x}", limb.0)?,
                (false, true) => write!(f, "{:0width$X}", limb.0)?,
            }
        }
        Ok(())
    }
}

impl<const BITS: u32, const LIMBS: usize> fmt::LowerHex for BigUint<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, false)
    }
}

impl<const BITS: u32, const LIMBS: usize> fmt::UpperHex for BigUint<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_hex(f, true)
    }
}

impl<const BITS: u32, const LIMBS: usize> FromStr for BigUint<BITS, LIMBS> {
    type Err = Error;

    /// Parse a `0x`-prefixed hexadecimal literal (see [`BigUint::from_hex_literal`]) or a
    /// decimal string.
    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
            Ok(Self::parse_hex_literal(bytes)?)
        } else {
            Self::from_decimal(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigUint, Error, ParseError, U64, U128, U256, nlimbs};
    use alloc::format;

    type U7 = BigUint<7, { nlimbs(7) }>;

    #[test]
    fn from_hex_literal() {
        assert_eq!(U128::from_hex_literal("0x3ea"), U128::from_u64(1002));
        assert_eq!(U128::from_hex_literal("0X00ff"), U128::from_u64(255));
        assert_eq!(
            U128::from_hex_literal("0xAbCdEf0123456789_big64"),
            U128::from_u64(0xabcd_ef01_2345_6789)
        );
    }

    #[test]
    fn parse_hex_literal_errors() {
        for (input, err) in [
            ("", ParseError::InvalidInput),
            ("0x", ParseError::InvalidInput),
            ("3ea", ParseError::InvalidInput),
            ("0xg1", ParseError::InvalidInput),
            ("0x1_big", ParseError::InvalidInput),
            ("0x1_big0", ParseError::InvalidInput),
            ("0x1_bug8", ParseError::InvalidInput),
            ("0x1_big8x", ParseError::InvalidInput),
            ("0x1ff_big8", ParseError::OutsideRange),
            ("0x1_0000000000000000_0000000000000000", ParseError::InvalidInput),
            ("0x100000000000000000000000000000000", ParseError::OutsideRange),
        ] {
            assert_eq!(U128::parse_hex_literal(input.as_bytes()), Err(err), "{input}");
        }
        assert_eq!(U7::parse_hex_literal(b"0x80"), Err(ParseError::OutsideRange));
        assert_eq!(U7::parse_hex_literal(b"0x7f"), Ok(U7::MAX));
    }

    #[test]
    fn leading_zeros_beyond_width_are_accepted() {
        assert_eq!(U7::parse_hex_literal(b"0x000000000000000000000000001"), Ok(U7::ONE));
    }

    #[test]
    fn from_le_slice() {
        let n = U64::from_le_slice(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(n, U64::from_u64(0x030201));
        assert_eq!(U7::from_le_slice(&[0x80]), Err(Error::Overflow));
        assert_eq!(U64::from_le_slice(&[0; 16]), Ok(U64::ZERO));
        assert_eq!(
            U64::from_le_slice(&[0, 0, 0, 0, 0, 0, 0, 0, 1]),
            Err(Error::Overflow)
        );
    }

    #[test]
    fn fmt_hex() {
        let n = U256::from_hex_literal("0x1000000000000000000000000000000000000003ea");
        assert_eq!(
            format!("{n:x}"),
            "1000000000000000000000000000000000000003ea"
        );
        assert_eq!(
            format!("{n:#X}"),
            "0x1000000000000000000000000000000000000003EA"
        );
        assert_eq!(format!("{:x}", U256::ZERO), "0");
        assert_eq!(format!("{:x}", U128::from_u64(1002)), "3ea");
    }

    #[test]
    fn from_str() {
        assert_eq!("0x3ea".parse::<U128>(), Ok(U128::from_u64(1002)));
        assert_eq!("1002".parse::<U128>(), Ok(U128::from_u64(1002)));
        assert_eq!(
            "128".parse::<U7>(),
            Err(Error::Parse(ParseError::OutsideRange))
        );
        assert_eq!(
            "0xzz".parse::<U7>(),
            Err(Error::Parse(ParseError::InvalidInput))
        );
    }
}
