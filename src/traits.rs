//! Traits shared by the integer types and the modular engines.

use crate::BigUint;
use core::fmt::Debug;

#[cfg(feature = "rand_core")]
use {crate::Result, rand_core::RngCore};

/// Exponent accepted by [`pow_unsigned`][`crate::modular::pow_unsigned`]: an unsigned integer
/// whose bits can be scanned from the most significant end.
pub trait PowExponent {
    /// Number of significant bits, i.e. the position of the highest set bit plus one.
    fn exponent_bits(&self) -> u32;

    /// Value of the bit at `index`.
    fn exponent_bit(&self, index: u32) -> bool;
}

/// Unsigned integer backing a modular engine.
///
/// Provides the handful of variable-time queries the square-root and residue helpers need.
pub trait Unsigned: PowExponent + Copy + Debug + Eq + Ord {
    /// Is this value zero?
    fn is_zero_vartime(&self) -> bool;

    /// Number of trailing zero bits. Zero reports its full width.
    fn trailing_zeros_vartime(&self) -> u32;

    /// Computes `self >> shift`, yielding zero for shifts of the full width or more.
    #[must_use]
    fn shr_vartime(&self, shift: u32) -> Self;
}

macro_rules! impl_primitive_unsigned {
    ($($ty:ty),+) => {
        $(
            impl PowExponent for $ty {
                #[inline]
                fn exponent_bits(&self) -> u32 {
                    <$ty>::BITS - self.leading_zeros()
                }

                #[inline]
                fn exponent_bit(&self, index: u32) -> bool {
                    index < <$ty>::BITS && (self >> index) & 1 == 1
                }
            }

            impl Unsigned for $ty {
                #[inline]
                fn is_zero_vartime(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn trailing_zeros_vartime(&self) -> u32 {
                    self.trailing_zeros()
                }

                #[inline]
                fn shr_vartime(&self, shift: u32) -> Self {
                    self.checked_shr(shift).unwrap_or(0)
                }
            }
        )+
    };
}

impl_primitive_unsigned!(u8, u16, u32, u64, u128, usize);

impl<const BITS: u32, const LIMBS: usize> PowExponent for BigUint<BITS, LIMBS> {
    #[inline]
    fn exponent_bits(&self) -> u32 {
        self.bits()
    }

    #[inline]
    fn exponent_bit(&self, index: u32) -> bool {
        self.bit(index)
    }
}

impl<const BITS: u32, const LIMBS: usize> Unsigned for BigUint<BITS, LIMBS> {
    #[inline]
    fn is_zero_vartime(&self) -> bool {
        self.is_zero()
    }

    #[inline]
    fn trailing_zeros_vartime(&self) -> u32 {
        self.trailing_zeros()
    }

    #[inline]
    fn shr_vartime(&self, shift: u32) -> Self {
        BigUint::shr_vartime(self, shift)
    }
}

/// Random number generation support.
#[cfg(feature = "rand_core")]
pub trait Random: Sized {
    /// Generate a uniformly random value.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

/// Modular random number generation support.
#[cfg(feature = "rand_core")]
pub trait RandomMod: Sized {
    /// Generate a uniformly random value less than `modulus`.
    ///
    /// Uses rejection sampling, which is unbiased but runs in variable time.
    /// Returns [`Error::DivByZero`][`crate::Error::DivByZero`] for a zero `modulus`.
    fn random_mod<R: RngCore + ?Sized>(rng: &mut R, modulus: &Self) -> Result<Self>;
}

#[cfg(test)]
mod tests {
    use super::{PowExponent, Unsigned};
    use crate::U128;

    #[test]
    fn primitive_exponent_bits() {
        assert_eq!(0u64.exponent_bits(), 0);
        assert_eq!(5u8.exponent_bits(), 3);
        assert!(5u32.exponent_bit(2));
        assert!(!5u32.exponent_bit(1));
        assert!(!u16::MAX.exponent_bit(16));
    }

    #[test]
    fn big_uint_matches_primitive() {
        let x = 0x8000_0000_0000_0001_0000_0000_0000_0100u128;
        let big = U128::from_u128(x);
        assert_eq!(big.exponent_bits(), x.exponent_bits());
        assert_eq!(big.trailing_zeros_vartime(), x.trailing_zeros_vartime());
        assert_eq!(
            Unsigned::shr_vartime(&big, 72),
            U128::from_u128(Unsigned::shr_vartime(&x, 72))
        );
        assert_eq!(Unsigned::shr_vartime(&x, 128), 0);
        for i in [0, 8, 64, 127, 128] {
            assert_eq!(big.exponent_bit(i), x.exponent_bit(i), "bit {i}");
        }
    }
}
