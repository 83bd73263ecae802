//! [`BigUint`] modular inversion.

use crate::{BigUint, Error, Limb, Result};

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Computes `self^-1 mod modulus` for any non-zero `modulus` using the extended Euclidean
    /// algorithm.
    ///
    /// Returns [`Error::DivByZero`] for a zero modulus and [`Error::NotInvertible`] when
    /// `gcd(self, modulus) != 1`. Modulo `1` every value inverts to zero.
    pub fn inv_mod(&self, modulus: &Self) -> Result<Self> {
        let mut r0 = *modulus;
        let mut r1 = self.checked_rem(modulus)?;

        // Bezout coefficient magnitudes; their signs alternate, so only the step parity is kept.
        let mut t0 = Self::ZERO;
        let mut t1 = Self::ONE;
        let mut even_steps = true;

        while !r1.is_zero() {
            let (q, r) = r0.div_rem(&r1)?;
            r0 = r1;
            r1 = r;

            // |t| never exceeds the modulus.
            let t = t0.wrapping_add(&q.wrapping_mul(&t1));
            t0 = t1;
            t1 = t;
            even_steps = !even_steps;
        }

        if r0 != Self::ONE {
            return Err(Error::NotInvertible);
        }

        if !even_steps || t0.is_zero() {
            Ok(t0)
        } else {
            Ok(modulus.wrapping_sub(&t0))
        }
    }

    /// Computes `self^-1 mod modulus` for an odd `modulus >= 3` using a binary extended GCD.
    ///
    /// Performs `2 * bits(modulus)` halving steps, each mirrored on the Bezout coefficient.
    /// Returns [`Error::InvalidModulus`] if `modulus` is even or smaller than `3`, and
    /// [`Error::NotInvertible`] when `gcd(self, modulus) != 1`.
    pub fn inv_odd_mod(&self, modulus: &Self) -> Result<Self> {
        if modulus.is_even() || modulus.bits() < 2 {
            return Err(Error::InvalidModulus);
        }

        let mut a = self.checked_rem(modulus)?;
        let mut b = *modulus;
        let mut u = Self::ONE;
        let mut v = Self::ZERO;

        for _ in 0..2 * modulus.bits() {
            let odd = a.is_odd();
            if odd {
                if a >= b {
                    a = a.wrapping_sub(&b);
                } else {
                    core::mem::swap(&mut u, &mut v);
                    let diff = b.wrapping_sub(&a);
                    b = a;
                    a = diff;
                }
            }
            a = a.shr1();

            if odd {
                u = u.sub_mod(&v, modulus);
            }
            u = u.div_by_2_mod(modulus);
        }

        if b == Self::ONE {
            Ok(v)
        } else {
            Err(Error::NotInvertible)
        }
    }

    /// Computes `self / 2 mod modulus` for an odd `modulus` and `self < modulus`.
    pub(crate) const fn div_by_2_mod(&self, modulus: &Self) -> Self {
        if self.is_even() {
            return self.shr1();
        }

        // `self + modulus` is even and may carry one bit past the top limb.
        let (sum, carry) = Self::adc_arrays(&self.limbs, &modulus.limbs, Limb::ZERO);
        let mut limbs = [Limb::ZERO; LIMBS];
        let mut i = 0;
        while i < LIMBS {
            let hi = if i + 1 < LIMBS {
                sum[i + 1].0
            } else {
                carry.0
            };
            limbs[i] = Limb((sum[i].0 >> 1) | (hi << Limb::HI_BIT));
            i += 1;
        }

        Self { limbs }
    }
}
