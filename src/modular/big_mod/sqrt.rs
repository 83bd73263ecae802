//! Quadratic residuosity and square roots.

use super::{BigMod, BigModInteger};
use crate::{
    Error, JacobiSymbol, Result, Unsigned,
    modular::{ModularOps, OpsStorage},
};

/// Candidates tried when searching for a quadratic non-residue.
const NON_RESIDUE_SEARCH_LIMIT: u64 = 1 << 16;

impl<S: OpsStorage> BigMod<S> {
    /// Legendre symbol of `self` by Euler's criterion, for an odd prime modulus.
    ///
    /// For a composite modulus the result is meaningless.
    pub fn legendre(&self) -> JacobiSymbol {
        let euler = self.pow_unsigned(&self.modulus().shr_vartime(1));
        if euler.is_zero() {
            JacobiSymbol::Zero
        } else if euler.is_one() {
            JacobiSymbol::One
        } else {
            JacobiSymbol::MinusOne
        }
    }

    /// Is `self` a square modulo an odd prime?
    pub fn is_square(&self) -> bool {
        !self.legendre().is_minus_one()
    }

    /// A square root of `self` by Tonelli-Shanks.
    ///
    /// Returns [`Error::NoSquareRoot`] when `self` is not a quadratic residue, and also when the
    /// search fails because the modulus is not prime. An even modulus other than `2` yields
    /// [`Error::InvalidModulus`]. Runs in variable time.
    pub fn sqrt(&self) -> Result<Self> {
        if self.is_zero() {
            return Ok(self.clone());
        }

        let p = self.modulus();
        if p.trailing_zeros_vartime() > 0 {
            // Every residue modulo 2 is its own square root.
            return if p.shr_vartime(2).is_zero_vartime() {
                Ok(self.clone())
            } else {
                Err(Error::InvalidModulus)
            };
        }

        let p_half = p.shr_vartime(1);
        if !self.pow_unsigned(&p_half).is_one() {
            return Err(Error::NoSquareRoot);
        }

        // p - 1 = q * 2^s with q odd.
        let s = p_half.trailing_zeros_vartime() + 1;
        let q = p.shr_vartime(s);

        let mut r = self.pow_unsigned(&q.shr_vartime(1));
        let mut n = r.square() * self;
        r *= self;

        if !n.is_one() {
            let z = self.find_non_residue(&p_half)?;
            let mut c = z.pow_unsigned(&q);
            let mut m = s;

            while !n.is_one() {
                // Least i with n^(2^i) = 1.
                let mut i = 0;
                let mut t = n.clone();
                while !t.is_one() {
                    t = t.square();
                    i += 1;
                    if i >= m {
                        return Err(Error::NoSquareRoot);
                    }
                }

                for _ in 0..m - i - 1 {
                    c = c.square();
                }
                r *= &c;
                c = c.square();
                n *= &c;
                m = i;
            }
        }

        if r.square() == *self {
            Ok(r)
        } else {
            Err(Error::NoSquareRoot)
        }
    }

    fn find_non_residue(&self, p_half: &BigModInteger<S>) -> Result<Self> {
        let minus_one = -Self::one(self.storage.clone());
        for candidate in 2..NON_RESIDUE_SEARCH_LIMIT {
            let z = self.with_raw_base(self.ops().from_u64(candidate));
            if z.is_zero() {
                break;
            }
            if z.pow_unsigned(p_half) == minus_one {
                return Ok(z);
            }
        }
        Err(Error::NoSquareRoot)
    }
}
