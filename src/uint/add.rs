//! [`BigUint`] addition operations.

use crate::{BigUint, Error, Limb, Result};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes `self + rhs mod 2^BITS`, returning the result along with a flag which is set if
    /// the true sum did not fit in `BITS` bits.
    #[inline]
    #[must_use]
    pub const fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let (limbs, carry) = Self::adc_arrays(&self.limbs, &rhs.limbs, Limb::ZERO);
        let overflow = !carry.is_zero() || Self::exceeds_width(&limbs);
        (Self::from_limbs(limbs), overflow)
    }

    /// Perform wrapping addition, discarding overflow.
    #[inline]
    #[must_use]
    pub const fn wrapping_add(&self, rhs: &Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Perform checked addition, returning [`Error::Overflow`] if the sum does not fit in `BITS`
    /// bits.
    #[inline]
    pub const fn checked_add(&self, rhs: &Self) -> Result<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Ok(sum),
            (_, true) => Err(Error::Overflow),
        }
    }
}

impl_checked_binop!(
    Add,
    add,
    AddAssign,
    add_assign,
    checked_add,
    "attempted to add with overflow"
);

#[cfg(test)]
mod tests {
    use crate::{BigUint, Error, U128, nlimbs};

    type U7 = BigUint<7, { nlimbs(7) }>;
    type U36 = BigUint<36, { nlimbs(36) }>;

    #[test]
    fn checked_add_ok() {
        let result = U128::ONE.checked_add(&U128::ONE);
        assert_eq!(result, Ok(U128::from_u64(2)));
    }

    #[test]
    fn checked_add_overflow() {
        assert_eq!(U128::MAX.checked_add(&U128::ONE), Err(Error::Overflow));
    }

    #[test]
    fn partial_limb_overflow() {
        let a = U36::from_u64(0xAFFFFFFFF);
        assert_eq!(a + U36::from_u64(2), U36::from_u64(0xB00000001));
        assert_eq!(U36::MAX.checked_add(&U36::ONE), Err(Error::Overflow));
        assert_eq!(U36::MAX.wrapping_add(&U36::ONE), U36::ZERO);
    }

    #[test]
    fn wrapping_add_small_width() {
        assert_eq!(U7::from_u64(120).wrapping_add(&U7::from_u64(10)), U7::from_u64(2));
        let (sum, overflow) = U7::from_u64(120).overflowing_add(&U7::from_u64(7));
        assert_eq!(sum, U7::from_u64(127));
        assert!(!overflow);
    }

    #[test]
    fn add_assign() {
        let mut n = U128::from_u64(40);
        n += U128::from_u64(2);
        n += &U128::ONE;
        assert_eq!(n, U128::from_u64(43));
    }

    #[test]
    #[should_panic(expected = "attempted to add with overflow")]
    fn add_overflow_panics() {
        let _ = U7::MAX + U7::ONE;
    }
}
