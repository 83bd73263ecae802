//! Fixed-width big unsigned integers.

#![allow(clippy::needless_range_loop, clippy::many_single_char_names)]

#[macro_use]
mod macros;

mod add;
mod add_mod;
mod bit_and;
mod bit_not;
mod bit_or;
mod bit_xor;
mod bits;
mod cmp;
mod ct;
mod div;
mod encoding;
mod from;
mod inv_mod;
mod mul;
mod mul_mod;
mod neg;
mod resize;
mod shl;
mod shr;
pub(crate) mod slice;
mod sub;
mod sub_mod;

#[cfg(feature = "rand_core")]
mod rand;

use crate::{Limb, Word, nlimbs};
use core::{cmp::Ordering, fmt};

/// Big unsigned integer of exactly `BITS` bits.
///
/// Stored as `LIMBS` little-endian [`Limb`]s, where `LIMBS` must equal [`nlimbs`]`(BITS)`.
/// Bits at positions `>= BITS` of the top limb are always zero; every operation preserves this.
///
/// Widths that are not a multiple of the limb size are fully supported:
///
/// ```
/// use crypto_multiprecision::{BigUint, nlimbs};
///
/// type U7 = BigUint<7, { nlimbs(7) }>;
/// let x = U7::from_u64(120);
/// assert_eq!(x.wrapping_add(&U7::from_u64(10)), U7::from_u64(2));
/// ```
#[derive(Copy, Clone, Hash, PartialEq, Eq)]
pub struct BigUint<const BITS: u32, const LIMBS: usize> {
    /// Inner limb array. Stored from least significant to most significant.
    pub(crate) limbs: [Limb; LIMBS],
}

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    const LAYOUT_CHECK: () = assert!(
        BITS > 0 && LIMBS == nlimbs(BITS),
        "`LIMBS` must equal `nlimbs(BITS)`"
    );

    /// The value `0`.
    pub const ZERO: Self = {
        let () = Self::LAYOUT_CHECK;
        Self {
            limbs: [Limb::ZERO; LIMBS],
        }
    };

    /// The value `1`.
    pub const ONE: Self = {
        let mut limbs = Self::ZERO.limbs;
        limbs[0] = Limb::ONE;
        Self { limbs }
    };

    /// Maximum value this [`BigUint`] can express: `2^BITS - 1`.
    pub const MAX: Self = {
        let () = Self::LAYOUT_CHECK;
        let mut limbs = [Limb::MAX; LIMBS];
        limbs[LIMBS - 1] = Limb(Self::TOP_MASK);
        Self { limbs }
    };

    /// Total size of the represented integer in bits.
    pub const BITS: u32 = BITS;

    /// The number of limbs used on this platform.
    pub const LIMBS: usize = LIMBS;

    /// Bits of the top limb that belong to the value.
    pub(crate) const TOP_MASK: Word = {
        let rem = BITS % Limb::BITS;
        if rem == 0 { Word::MAX } else { (1 << rem) - 1 }
    };

    /// Mask of the bits of the most significant limb that are part of the value.
    #[inline(always)]
    #[must_use]
    pub const fn top_limb_mask() -> Limb {
        Limb(Self::TOP_MASK)
    }

    /// Number of limbs in this type.
    #[inline(always)]
    #[must_use]
    pub const fn nlimbs() -> usize {
        LIMBS
    }

    /// Create a [`BigUint`] from an array of [`Limb`]s, discarding the bits at positions `>= BITS`.
    #[inline]
    #[must_use]
    pub const fn from_limbs(mut limbs: [Limb; LIMBS]) -> Self {
        let () = Self::LAYOUT_CHECK;
        limbs[LIMBS - 1] = Limb(limbs[LIMBS - 1].0 & Self::TOP_MASK);
        Self { limbs }
    }

    /// Create a [`BigUint`] from an array of [`Word`]s, discarding the bits at positions `>= BITS`.
    #[inline]
    #[must_use]
    pub const fn from_words(words: [Word; LIMBS]) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            limbs[i] = Limb(words[i]);
            i += 1;
        }

        Self::from_limbs(limbs)
    }

    /// Create an array of [`Word`]s from a [`BigUint`].
    #[inline]
    #[must_use]
    pub const fn to_words(self) -> [Word; LIMBS] {
        let mut words = [0; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            words[i] = self.limbs[i].0;
            i += 1;
        }

        words
    }

    /// Borrow the limbs of this [`BigUint`].
    #[inline(always)]
    #[must_use]
    pub const fn as_limbs(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }

    /// Get the limb at `index`.
    ///
    /// # Panics
    /// If `index >= LIMBS`.
    #[inline]
    #[must_use]
    pub const fn limb(&self, index: usize) -> Limb {
        self.limbs[index]
    }

    /// Replace the limb at `index`. Bits of the top limb beyond `BITS` are discarded.
    ///
    /// # Panics
    /// If `index >= LIMBS`.
    #[inline]
    pub fn set_limb(&mut self, index: usize, limb: Limb) {
        self.limbs[index] = if index == LIMBS - 1 {
            Limb(limb.0 & Self::TOP_MASK)
        } else {
            limb
        };
    }

    /// Is this value zero?
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < LIMBS {
            if !self.limbs[i].is_zero() {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Is this value odd?
    #[inline(always)]
    #[must_use]
    pub const fn is_odd(&self) -> bool {
        self.limbs[0].is_odd()
    }

    /// Is this value even?
    #[inline(always)]
    #[must_use]
    pub const fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Do the raw limbs carry bits at positions `>= BITS`?
    #[inline(always)]
    pub(crate) const fn exceeds_width(limbs: &[Limb; LIMBS]) -> bool {
        limbs[LIMBS - 1].0 & !Self::TOP_MASK != 0
    }

    /// Computes `a + b + carry` over raw limb arrays, returning the sum and the carry out of the
    /// top limb.
    #[inline(always)]
    pub(crate) const fn adc_arrays(
        a: &[Limb; LIMBS],
        b: &[Limb; LIMBS],
        mut carry: Limb,
    ) -> ([Limb; LIMBS], Limb) {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            let (w, c) = a[i].adc(b[i], carry);
            limbs[i] = w;
            carry = c;
            i += 1;
        }

        (limbs, carry)
    }

    /// Computes `a - (b + borrow)` over raw limb arrays, returning the difference and the borrow
    /// out of the top limb.
    #[inline(always)]
    pub(crate) const fn sbb_arrays(
        a: &[Limb; LIMBS],
        b: &[Limb; LIMBS],
        mut borrow: Limb,
    ) -> ([Limb; LIMBS], Limb) {
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;

        while i < LIMBS {
            let (w, bo) = a[i].sbb(b[i], borrow);
            limbs[i] = w;
            borrow = bo;
            i += 1;
        }

        (limbs, borrow)
    }

    /// Compares raw limb arrays as integers.
    #[inline(always)]
    pub(crate) const fn cmp_arrays(a: &[Limb; LIMBS], b: &[Limb; LIMBS]) -> Ordering {
        let mut i = LIMBS;
        while i > 0 {
            i -= 1;
            if a[i].0 != b[i].0 {
                return if a[i].0 > b[i].0 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
        }
        Ordering::Equal
    }
}

impl<const BITS: u32, const LIMBS: usize> AsRef<[Limb]> for BigUint<BITS, LIMBS> {
    fn as_ref(&self) -> &[Limb] {
        &self.limbs
    }
}

impl<const BITS: u32, const LIMBS: usize> AsRef<[Limb; LIMBS]> for BigUint<BITS, LIMBS> {
    fn as_ref(&self) -> &[Limb; LIMBS] {
        &self.limbs
    }
}

impl<const BITS: u32, const LIMBS: usize> Default for BigUint<BITS, LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const BITS: u32, const LIMBS: usize> num_traits::Zero for BigUint<BITS, LIMBS> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        BigUint::is_zero(self)
    }
}

impl<const BITS: u32, const LIMBS: usize> num_traits::One for BigUint<BITS, LIMBS> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<const BITS: u32, const LIMBS: usize> num_traits::Bounded for BigUint<BITS, LIMBS> {
    fn min_value() -> Self {
        Self::ZERO
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl<const BITS: u32, const LIMBS: usize> fmt::Debug for BigUint<BITS, LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint({self:#x})")
    }
}

#[cfg(feature = "zeroize")]
impl<const BITS: u32, const LIMBS: usize> zeroize::DefaultIsZeroes for BigUint<BITS, LIMBS> {}

impl_uint_aliases! {
    (U64, 64, "64-bit"),
    (U128, 128, "128-bit"),
    (U192, 192, "192-bit"),
    (U256, 256, "256-bit"),
    (U320, 320, "320-bit"),
    (U384, 384, "384-bit"),
    (U448, 448, "448-bit"),
    (U512, 512, "512-bit"),
    (U576, 576, "576-bit"),
    (U768, 768, "768-bit"),
    (U1024, 1024, "1024-bit"),
    (U2048, 2048, "2048-bit"),
    (U3072, 3072, "3072-bit"),
    (U4096, 4096, "4096-bit"),
    (U8192, 8192, "8192-bit")
}
