//! Limb subtraction

use crate::{Limb, primitives::borrowing_sub};

impl Limb {
    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    ///
    /// The borrow is `0` or `1`.
    #[inline(always)]
    #[must_use]
    pub const fn sbb(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Perform wrapping subtraction, discarding underflow and wrapping around
    /// the boundary of the type.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_sub(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_sub(rhs.0))
    }

    /// Perform wrapping negation.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_neg(&self) -> Self {
        Limb(self.0.wrapping_neg())
    }
}
