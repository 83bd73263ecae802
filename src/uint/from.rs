//! `From`-like conversions for [`BigUint`].

use crate::{BigUint, Error, Limb, Result, Word};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Create a [`BigUint`] from a `u8` (const-friendly).
    ///
    /// # Panics
    /// If the value does not fit in `BITS` bits.
    #[inline]
    #[must_use]
    pub const fn from_u8(n: u8) -> Self {
        Self::from_u128(n as u128)
    }

    /// Create a [`BigUint`] from a `u16` (const-friendly).
    ///
    /// # Panics
    /// If the value does not fit in `BITS` bits.
    #[inline]
    #[must_use]
    pub const fn from_u16(n: u16) -> Self {
        Self::from_u128(n as u128)
    }

    /// Create a [`BigUint`] from a `u32` (const-friendly).
    ///
    /// # Panics
    /// If the value does not fit in `BITS` bits.
    #[inline]
    #[must_use]
    pub const fn from_u32(n: u32) -> Self {
        Self::from_u128(n as u128)
    }

    /// Create a [`BigUint`] from a `u64` (const-friendly).
    ///
    /// # Panics
    /// If the value does not fit in `BITS` bits.
    #[inline]
    #[must_use]
    pub const fn from_u64(n: u64) -> Self {
        Self::from_u128(n as u128)
    }

    /// Create a [`BigUint`] from a `u128` (const-friendly).
    ///
    /// # Panics
    /// If the value does not fit in `BITS` bits.
    #[inline]
    #[must_use]
    pub const fn from_u128(n: u128) -> Self {
        match Self::checked_from_u128(n) {
            Ok(value) => value,
            Err(_) => panic!("value does not fit in `BITS` bits"),
        }
    }

    /// Create a [`BigUint`] from a `u128`, returning [`Error::Overflow`] if it does not fit in
    /// `BITS` bits.
    #[inline]
    pub const fn checked_from_u128(n: u128) -> Result<Self> {
        let mut limbs = Self::ZERO.limbs;
        let mut rest = n;

        let mut i = 0;
        while i < LIMBS && rest != 0 {
            limbs[i] = Limb(rest as Word);
            rest >>= Limb::BITS;
            i += 1;
        }

        if rest != 0 || Self::exceeds_width(&limbs) {
            Err(Error::Overflow)
        } else {
            Ok(Self { limbs })
        }
    }

    /// Convert to a `u128`, returning [`Error::Overflow`] if the value does not fit.
    #[inline]
    pub const fn checked_to_u128(&self) -> Result<u128> {
        if self.bits() > u128::BITS {
            return Err(Error::Overflow);
        }

        let mut n = 0u128;
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if (i as u32) * Limb::BITS < u128::BITS {
                n |= (self.limbs[i].0 as u128) << (i as u32 * Limb::BITS);
            }
        }
        Ok(n)
    }
}

macro_rules! impl_try_from_primitive {
    ($($prim:ty),+) => {
        $(
            impl<const BITS: u32, const LIMBS: usize> TryFrom<$prim> for BigUint<BITS, LIMBS> {
                type Error = Error;

                #[inline]
                fn try_from(n: $prim) -> Result<Self> {
                    Self::checked_from_u128(u128::from(n))
                }
            }
        )+
    };
}

impl_try_from_primitive!(u8, u16, u32, u64, u128);

impl<const BITS: u32, const LIMBS: usize> TryFrom<BigUint<BITS, LIMBS>> for u128 {
    type Error = Error;

    fn try_from(n: BigUint<BITS, LIMBS>) -> Result<u128> {
        n.checked_to_u128()
    }
}

impl<const BITS: u32, const LIMBS: usize> TryFrom<BigUint<BITS, LIMBS>> for u64 {
    type Error = Error;

    fn try_from(n: BigUint<BITS, LIMBS>) -> Result<u64> {
        u64::try_from(n.checked_to_u128()?).map_err(|_| Error::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigUint, Error, U64, U128, U256, nlimbs};

    type U7 = BigUint<7, { nlimbs(7) }>;
    type U60 = BigUint<60, { nlimbs(60) }>;

    #[test]
    fn from_u64() {
        let n = U64::from_u64(0xffff_ffff_0000_0001);
        assert_eq!(u64::from(n.to_words()[0]) & 0xffff_ffff, 1);
        assert_eq!(u64::try_from(n), Ok(0xffff_ffff_0000_0001));
    }

    #[test]
    fn from_u128() {
        let n = U128::from_u128(0x0011_2233_4455_6677_8899_aabb_ccdd_eeff);
        assert_eq!(u128::try_from(n), Ok(0x0011_2233_4455_6677_8899_aabb_ccdd_eeff));
    }

    #[test]
    fn try_from_narrow() {
        assert_eq!(U7::try_from(127u8), Ok(U7::MAX));
        assert_eq!(U7::try_from(128u32), Err(Error::Overflow));
        assert_eq!(U60::try_from(u64::MAX), Err(Error::Overflow));
        assert_eq!(U64::try_from(u128::MAX), Err(Error::Overflow));
    }

    #[test]
    fn to_primitive_overflow() {
        assert_eq!(u64::try_from(U256::MAX), Err(Error::Overflow));
        assert_eq!(u128::try_from(U256::ONE.shl_vartime(128)), Err(Error::Overflow));
        assert_eq!(u128::try_from(U256::MAX.shr_vartime(128)), Ok(u128::MAX));
    }

    #[test]
    #[should_panic(expected = "value does not fit")]
    fn from_u64_panics_on_overflow() {
        let _ = U7::from_u64(128);
    }
}
