//! [`BigUint`] modular multiplication operations.

use crate::{BigUint, Error, Result};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes `self * rhs mod p` by long division of the double-width product.
    ///
    /// Returns [`Error::DivByZero`] if `p` is zero. Operands need not be reduced.
    pub fn mul_mod(&self, rhs: &Self, p: &Self) -> Result<Self> {
        if p.is_zero() {
            return Err(Error::DivByZero);
        }
        let (lo, hi) = self.split_mul(rhs);
        Ok(Self::rem_wide(&lo, &hi, p))
    }
}
