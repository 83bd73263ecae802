use crate::{BigUint, Error, Result};
use core::ops::Neg;
use subtle::{Choice, ConstantTimeEq};

/// Possible return values for Jacobi symbol calculations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum JacobiSymbol {
    /// The two arguments are not coprime, they have a common divisor apart from 1.
    Zero = 0,

    /// The two arguments are coprime. If the lower argument is prime, then the upper argument
    /// is quadratic residue modulo the lower argument. Otherwise, the upper argument is known to
    /// be quadratic nonresidue for an even number of prime factors of the lower argument.
    One = 1,

    /// The two terms are coprime, and the upper argument is a quadratic nonresidue modulo the
    /// lower argument.
    MinusOne = -1,
}

impl JacobiSymbol {
    /// Determine if the symbol is zero.
    pub const fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }

    /// Determine if the symbol is one.
    pub const fn is_one(&self) -> bool {
        matches!(self, Self::One)
    }

    /// Determine if the symbol is minus one.
    pub const fn is_minus_one(&self) -> bool {
        matches!(self, Self::MinusOne)
    }

    /// Negate the symbol.
    #[must_use]
    pub const fn neg(self) -> Self {
        match self {
            Self::Zero => Self::Zero,
            Self::One => Self::MinusOne,
            Self::MinusOne => Self::One,
        }
    }
}

impl ConstantTimeEq for JacobiSymbol {
    fn ct_eq(&self, other: &Self) -> Choice {
        (*self as i8).ct_eq(&(*other as i8))
    }
}

impl Neg for JacobiSymbol {
    type Output = Self;

    fn neg(self) -> Self {
        JacobiSymbol::neg(self)
    }
}

impl From<JacobiSymbol> for i8 {
    fn from(symbol: JacobiSymbol) -> i8 {
        symbol as i8
    }
}

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Compute the Jacobi symbol `(self|n)` for an odd `n`.
    ///
    /// For prime `n` this is the Legendre symbol, telling whether `self` is a quadratic residue
    /// modulo `n`. Returns [`Error::InvalidModulus`] if `n` is even.
    ///
    /// This method executes in variable time.
    pub fn jacobi_symbol(&self, n: &Self) -> Result<JacobiSymbol> {
        if n.is_even() {
            return Err(Error::InvalidModulus);
        }

        let mut a = self.checked_rem(n)?;
        let mut n = *n;
        let mut symbol = JacobiSymbol::One;

        while !a.is_zero() {
            let shift = a.trailing_zeros();
            a = a.shr_vartime(shift);

            // (2|n) = -1 iff n = 3, 5 (mod 8)
            let n_mod_8 = n.limbs[0].0 & 7;
            if shift & 1 == 1 && (n_mod_8 == 3 || n_mod_8 == 5) {
                symbol = -symbol;
            }

            // Quadratic reciprocity: both odd here.
            core::mem::swap(&mut a, &mut n);
            if a.limbs[0].0 & 3 == 3 && n.limbs[0].0 & 3 == 3 {
                symbol = -symbol;
            }
            a = a.checked_rem(&n)?;
        }

        if n == Self::ONE {
            Ok(symbol)
        } else {
            Ok(JacobiSymbol::Zero)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::JacobiSymbol;
    use crate::{Error, U64, U256};

    #[test]
    fn jacobi_small() {
        let n = U64::from_u64(7);
        let symbols = [0i8, 1, 1, -1, 1, -1, -1];
        for (a, &expected) in symbols.iter().enumerate() {
            let symbol = U64::from_u64(a as u64).jacobi_symbol(&n).unwrap();
            assert_eq!(i8::from(symbol), expected, "({a}|7)");
        }
    }

    #[test]
    fn jacobi_composite() {
        // (2|15) = (2|3)(2|5) = (-1)(-1) = 1, though 2 is not a square mod 15
        assert_eq!(
            U64::from_u64(2).jacobi_symbol(&U64::from_u64(15)),
            Ok(JacobiSymbol::One)
        );
        assert_eq!(
            U64::from_u64(6).jacobi_symbol(&U64::from_u64(15)),
            Ok(JacobiSymbol::Zero)
        );
        assert_eq!(
            U64::from_u64(5).jacobi_symbol(&U64::ONE),
            Ok(JacobiSymbol::One)
        );
    }

    #[test]
    fn jacobi_even_modulus() {
        assert_eq!(
            U64::from_u64(3).jacobi_symbol(&U64::from_u64(8)),
            Err(Error::InvalidModulus)
        );
    }

    #[test]
    fn jacobi_large_prime() {
        // secp256k1 field prime, p = 3 (mod 4), so -1 is a non-residue
        let p = U256::from_hex_literal(
            "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        );
        let minus_one = p.wrapping_sub(&U256::ONE);
        assert_eq!(minus_one.jacobi_symbol(&p), Ok(JacobiSymbol::MinusOne));
        assert_eq!(U256::from_u64(4).jacobi_symbol(&p), Ok(JacobiSymbol::One));
    }

    #[test]
    fn negation() {
        assert_eq!(-JacobiSymbol::One, JacobiSymbol::MinusOne);
        assert_eq!(JacobiSymbol::Zero.neg(), JacobiSymbol::Zero);
        assert!(JacobiSymbol::MinusOne.is_minus_one());
    }
}
