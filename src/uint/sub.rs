//! [`BigUint`] subtraction operations.

use crate::{BigUint, Error, Limb, Result};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes `self - rhs mod 2^BITS`, returning the result along with a flag which is set if
    /// `rhs > self`.
    #[inline]
    #[must_use]
    pub const fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let (limbs, borrow) = Self::sbb_arrays(&self.limbs, &rhs.limbs, Limb::ZERO);
        (Self::from_limbs(limbs), !borrow.is_zero())
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around the boundary of
    /// the type.
    #[inline]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Perform checked subtraction, returning [`Error::Overflow`] on underflow.
    #[inline]
    pub const fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Ok(diff),
            (_, true) => Err(Error::Overflow),
        }
    }
}

impl_checked_binop!(
    Sub,
    sub,
    SubAssign,
    sub_assign,
    checked_sub,
    "attempted to subtract with underflow"
);

#[cfg(test)]
mod tests {
    use crate::{BigUint, Error, U128, nlimbs};

    type U7 = BigUint<7, { nlimbs(7) }>;

    #[test]
    fn checked_sub_ok() {
        assert_eq!(U128::ONE.checked_sub(&U128::ONE), Ok(U128::ZERO));
    }

    #[test]
    fn checked_sub_underflow() {
        assert_eq!(U128::ZERO.checked_sub(&U128::ONE), Err(Error::Overflow));
    }

    #[test]
    fn wrapping_sub_small_width() {
        assert_eq!(U7::from_u64(5).wrapping_sub(&U7::from_u64(20)), U7::from_u64(113));
        assert_eq!(U7::ZERO.wrapping_sub(&U7::ONE), U7::from_u64(127));
        assert_eq!(U128::ZERO.wrapping_sub(&U128::ONE), U128::MAX);
    }

    #[test]
    fn sub_assign() {
        let mut n = U128::from_u64(45);
        n -= U128::from_u64(2);
        n -= &U128::ONE;
        assert_eq!(n, U128::from_u64(42));
    }

    #[test]
    #[should_panic(expected = "attempted to subtract with underflow")]
    fn sub_underflow_panics() {
        let _ = U7::ZERO - U7::ONE;
    }
}
