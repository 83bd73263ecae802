//! Barrett reduction engine for arbitrary non-zero moduli.

use super::ModularOps;
use crate::{
    BigUint, Error, Limb, Result,
    uint::slice::{self, truncate_bits},
};
use core::cmp::Ordering;

/// Reduction engine for any modulus `m > 0`, keeping canonical residues in `[0, m)`.
///
/// Precomputes `mu = floor(2^(2k) / m)` where `k` is the bit length of `m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BarrettOps<const BITS: u32, const LIMBS: usize> {
    modulus: BigUint<BITS, LIMBS>,
    modulus_bits: u32,
    /// `floor(2^(2k) / m)`, at most `k + 2` bits.
    mu: [[Limb; LIMBS]; 2],
}

impl<const BITS: u32, const LIMBS: usize> BarrettOps<BITS, LIMBS> {
    /// Build the engine for a non-zero `modulus`, usable in `const` contexts.
    ///
    /// # Panics
    /// If `modulus` is zero.
    pub const fn from_modulus(modulus: BigUint<BITS, LIMBS>) -> Self {
        assert!(!modulus.is_zero(), "modulus must be non-zero");
        let k = modulus.bits();

        // Restoring binary long division of 2^(2k) by m. The remainder stays below m, so
        // doubling it needs at most one extra bit, returned as the carry of `shl1_raw`.
        let mut mu = [[Limb::ZERO; LIMBS]; 2];
        let mut rem = [Limb::ZERO; LIMBS];
        let mut i = 2 * k + 1;
        while i > 0 {
            i -= 1;
            let (mut doubled, carry) = BigUint::<BITS, LIMBS>::shl1_raw(&rem);
            if i == 2 * k {
                doubled[0].0 |= 1;
            }

            let fits = !carry.is_zero()
                || !matches!(
                    BigUint::<BITS, LIMBS>::cmp_arrays(&doubled, &modulus.limbs),
                    Ordering::Less
                );
            if fits {
                (doubled, _) =
                    BigUint::<BITS, LIMBS>::sbb_arrays(&doubled, &modulus.limbs, Limb::ZERO);
                let word = (i / Limb::BITS) as usize;
                mu[word / LIMBS][word % LIMBS].0 |= 1 << (i % Limb::BITS);
            }
            rem = doubled;
        }

        Self {
            modulus,
            modulus_bits: k,
            mu,
        }
    }

    /// Build the engine for `modulus`, returning [`Error::InvalidModulus`] if it is zero.
    pub fn new(modulus: BigUint<BITS, LIMBS>) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::InvalidModulus);
        }

        let k = modulus.bits();
        let mut buf = [[Limb::ZERO; LIMBS]; 4];
        let u = buf.as_flattened_mut();
        u[(2 * k / Limb::BITS) as usize] = Limb(1 << (2 * k % Limb::BITS));

        let mut v = modulus.limbs;
        let mut mu = [[Limb::ZERO; LIMBS]; 2];
        slice::div_rem(u, &mut v, mu.as_flattened_mut());

        Ok(Self {
            modulus,
            modulus_bits: k,
            mu,
        })
    }

    /// Bit length `k` of the modulus.
    pub const fn modulus_bits(&self) -> u32 {
        self.modulus_bits
    }

    /// Reduce the raw double-width value `(lo, hi)` modulo `m`.
    ///
    /// Values of at most `2k` bits take the Barrett path; wider ones fall back to long division.
    pub(crate) fn reduce_wide(&self, lo: &[Limb; LIMBS], hi: &[Limb; LIMBS]) -> BigUint<BITS, LIMBS> {
        let k = self.modulus_bits;
        let mut t = [*lo, *hi];
        let t = t.as_flattened_mut();
        if slice::bits(t) > 2 * k {
            return BigUint::rem_wide(lo, hi, &self.modulus);
        }

        // q = ((t >> (k - 1)) * mu) >> (k + 1), which undershoots floor(t / m) by at most 2.
        let mut q1 = [[Limb::ZERO; LIMBS]; 2];
        slice::shr_into(t, k - 1, q1.as_flattened_mut());
        let mut q2 = [[Limb::ZERO; LIMBS]; 4];
        slice::mul_into(q1.as_flattened(), self.mu.as_flattened(), q2.as_flattened_mut());
        let mut q3 = [[Limb::ZERO; LIMBS]; 2];
        slice::shr_into(q2.as_flattened(), k + 1, q3.as_flattened_mut());

        // r = (t - q * m) mod 2^(k + 2); two guard bits since r < 3m.
        let mut qm = [[Limb::ZERO; LIMBS]; 2];
        slice::mul_into(q3.as_flattened(), &self.modulus.limbs, qm.as_flattened_mut());
        truncate_bits(t, k + 2);
        slice::sub_assign(t, qm.as_flattened());
        truncate_bits(t, k + 2);

        while slice::cmp(t, &self.modulus.limbs) != Ordering::Less {
            slice::sub_assign(t, &self.modulus.limbs);
        }

        let mut limbs = [Limb::ZERO; LIMBS];
        limbs.copy_from_slice(&t[..LIMBS]);
        BigUint::from_limbs(limbs)
    }

    /// Reduce an integer that may exceed the modulus.
    fn reduce(&self, x: &BigUint<BITS, LIMBS>) -> BigUint<BITS, LIMBS> {
        if *x < self.modulus {
            return *x;
        }
        // Within 2m a single subtraction suffices.
        let diff = x.wrapping_sub(&self.modulus);
        if diff < self.modulus {
            return diff;
        }
        self.reduce_wide(&x.limbs, &[Limb::ZERO; LIMBS])
    }
}

impl<const BITS: u32, const LIMBS: usize> ModularOps for BarrettOps<BITS, LIMBS> {
    type Integer = BigUint<BITS, LIMBS>;

    #[inline]
    fn modulus(&self) -> Self::Integer {
        self.modulus
    }

    fn one(&self) -> Self::Integer {
        if self.modulus == BigUint::ONE {
            BigUint::ZERO
        } else {
            BigUint::ONE
        }
    }

    #[inline]
    fn add(&self, a: &Self::Integer, b: &Self::Integer) -> Self::Integer {
        a.add_mod(b, &self.modulus)
    }

    #[inline]
    fn sub(&self, a: &Self::Integer, b: &Self::Integer) -> Self::Integer {
        a.sub_mod(b, &self.modulus)
    }

    fn mul(&self, a: &Self::Integer, b: &Self::Integer) -> Self::Integer {
        let (lo, hi) = a.split_mul(b);
        self.reduce_wide(&lo, &hi)
    }

    fn square(&self, a: &Self::Integer) -> Self::Integer {
        let (lo, hi) = a.square_wide();
        self.reduce_wide(&lo, &hi)
    }

    #[inline]
    fn neg(&self, a: &Self::Integer) -> Self::Integer {
        a.neg_mod(&self.modulus)
    }

    #[inline]
    fn double(&self, a: &Self::Integer) -> Self::Integer {
        a.double_mod(&self.modulus)
    }

    #[inline]
    fn to_montgomery(&self, x: &Self::Integer) -> Self::Integer {
        self.reduce(x)
    }

    #[inline]
    fn from_montgomery(&self, a: &Self::Integer) -> Self::Integer {
        *a
    }

    fn from_u64(&self, x: u64) -> Self::Integer {
        let limbs = u64_limbs(x);
        self.from_limbs(&limbs)
    }

    fn inverse(&self, a: &Self::Integer) -> Result<Self::Integer> {
        if a.is_zero() {
            return Err(Error::NotInvertible);
        }
        if self.modulus.is_odd() && self.modulus_bits >= 2 {
            a.inv_odd_mod(&self.modulus)
        } else {
            a.inv_mod(&self.modulus)
        }
    }

    fn from_limbs(&self, limbs: &[Limb]) -> Self::Integer {
        BigUint::rem_limbs(limbs, &self.modulus)
    }
}

/// Split a `u64` into little-endian limbs.
pub(crate) const fn u64_limbs(x: u64) -> [Limb; 64 / Limb::BITS as usize] {
    let mut limbs = [Limb::ZERO; 64 / Limb::BITS as usize];
    let mut i = 0;
    while i < limbs.len() {
        limbs[i] = Limb((x >> (i as u32 * Limb::BITS)) as crate::Word);
        i += 1;
    }
    limbs
}
