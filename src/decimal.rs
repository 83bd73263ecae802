//! Support for base-10 parsing and encoding.

use crate::{BigUint, Limb, ParseError, Result, Word, word::WORD_MAX10};
use core::fmt;

/// Largest power of ten that fits in a [`Limb`].
const LIMB_MAX10: Limb = Limb(WORD_MAX10.0);

/// Number of decimal digits held by one [`LIMB_MAX10`] chunk.
const LIMB_LOG10: usize = WORD_MAX10.1;

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Parse a non-empty string of ASCII decimal digits.
    ///
    /// Returns [`ParseError::InvalidInput`] for an empty string or a non-digit character, and
    /// [`ParseError::OutsideRange`] if the value does not fit in `BITS` bits.
    pub fn from_decimal(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(ParseError::InvalidInput.into());
        }

        let mut limbs = [Limb::ZERO; LIMBS];
        let first = match bytes.len() % LIMB_LOG10 {
            0 => LIMB_LOG10,
            n => n,
        };

        let (head, tail) = bytes.split_at(first);
        for chunk in core::iter::once(head).chain(tail.chunks_exact(LIMB_LOG10)) {
            let mut value: Word = 0;
            let mut scale: Word = 1;
            for &byte in chunk {
                if !byte.is_ascii_digit() {
                    return Err(ParseError::InvalidInput.into());
                }
                value = value * 10 + Word::from(byte - b'0');
                scale *= 10;
            }

            let carry = mul_add_limb(&mut limbs, Limb(scale), Limb(value));
            if !carry.is_zero() || Self::exceeds_width(&limbs) {
                return Err(ParseError::OutsideRange.into());
            }
        }

        Ok(Self { limbs })
    }
}

/// `limbs = limbs * m + a`, returning the limb carried out of the top.
fn mul_add_limb(limbs: &mut [Limb], m: Limb, a: Limb) -> Limb {
    let mut carry = a;
    for limb in limbs.iter_mut() {
        (*limb, carry) = Limb::ZERO.mac(*limb, m, carry);
    }
    carry
}

impl<const BITS: u32, const LIMBS: usize> fmt::Display for BigUint<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Each chunk removes more than `Limb::BITS - 1` bits, so twice the limb count suffices.
        let mut buf = [[Limb::ZERO; LIMBS]; 2];
        let chunks = buf.as_flattened_mut();

        let mut n = 0;
        let mut rest = *self;
        loop {
            let (q, r) = rest.div_rem_limb(LIMB_MAX10);
            chunks[n] = r;
            n += 1;
            rest = q;
            if rest.is_zero() {
                break;
            }
        }

        write!(f, "{}", chunks[n - 1].0)?;
        for chunk in chunks[..n - 1].iter().rev() {
            write!(f, "{:0width$}", chunk.0, width = LIMB_LOG10)?;
        }
        Ok(())
    }
}
