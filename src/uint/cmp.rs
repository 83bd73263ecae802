//! [`BigUint`] comparisons.

use crate::BigUint;
use core::cmp::Ordering;

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Returns the ordering between `self` and `rhs`, comparing limbs from the most significant
    /// down.
    #[inline]
    #[must_use]
    pub const fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        Self::cmp_arrays(&self.limbs, &rhs.limbs)
    }
}

impl<const BITS: u32, const LIMBS: usize> Ord for BigUint<BITS, LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl<const BITS: u32, const LIMBS: usize> PartialOrd for BigUint<BITS, LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigUint, Limb, U128, nlimbs};
    use core::cmp::Ordering;

    type U83 = BigUint<83, { nlimbs(83) }>;

    #[test]
    fn cmp_limb_order() {
        let a = U128::ONE.shl_vartime(Limb::BITS);
        let b = U128::from_u64(u32::MAX as u64);
        assert_eq!(a.cmp(&b), Ordering::Greater);
        assert_eq!(b.cmp(&a), Ordering::Less);
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn ordering_is_total() {
        let values = [U83::ZERO, U83::ONE, U83::from_u64(u64::MAX), U83::MAX];
        for (i, a) in values.iter().enumerate() {
            for (j, b) in values.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j));
            }
        }
    }
}
