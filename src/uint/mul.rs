//! [`BigUint`] multiplication operations.

use crate::{BigUint, Error, Limb, Result};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Schoolbook multiplication returning the full double-width product as raw `(lo, hi)` limb
    /// arrays.
    ///
    /// The product of two `BITS`-bit values always fits in `2 * LIMBS` limbs.
    #[inline]
    #[must_use]
    pub(crate) const fn split_mul(&self, rhs: &Self) -> ([Limb; LIMBS], [Limb; LIMBS]) {
        let mut lo = [Limb::ZERO; LIMBS];
        let mut hi = [Limb::ZERO; LIMBS];

        let mut i = 0;
        while i < LIMBS {
            let mut carry = Limb::ZERO;

            let mut j = 0;
            while j < LIMBS {
                let k = i + j;
                if k < LIMBS {
                    let (w, c) = lo[k].mac(self.limbs[i], rhs.limbs[j], carry);
                    lo[k] = w;
                    carry = c;
                } else {
                    let (w, c) = hi[k - LIMBS].mac(self.limbs[i], rhs.limbs[j], carry);
                    hi[k - LIMBS] = w;
                    carry = c;
                }
                j += 1;
            }

            // Position `i + LIMBS` has not been written by any earlier row.
            hi[i] = carry;
            i += 1;
        }

        (lo, hi)
    }

    /// Square self, returning the raw double-width product.
    #[inline]
    #[must_use]
    pub(crate) const fn square_wide(&self) -> ([Limb; LIMBS], [Limb; LIMBS]) {
        self.split_mul(self)
    }

    /// Computes `self * rhs mod 2^BITS`, returning the result along with a flag which is set if
    /// the true product did not fit in `BITS` bits.
    #[inline]
    #[must_use]
    pub const fn overflowing_mul(&self, rhs: &Self) -> (Self, bool) {
        let (lo, hi) = self.split_mul(rhs);

        let mut overflow = Self::exceeds_width(&lo);
        let mut i = 0;
        while i < LIMBS {
            overflow |= !hi[i].is_zero();
            i += 1;
        }

        (Self::from_limbs(lo), overflow)
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline]
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: &Self) -> Self {
        self.overflowing_mul(rhs).0
    }

    /// Perform checked multiplication, returning [`Error::Overflow`] if the product does not fit
    /// in `BITS` bits.
    #[inline]
    pub const fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        match self.overflowing_mul(rhs) {
            (product, false) => Ok(product),
            (_, true) => Err(Error::Overflow),
        }
    }
}

impl_checked_binop!(
    Mul,
    mul,
    MulAssign,
    mul_assign,
    checked_mul,
    "attempted to multiply with overflow"
);
