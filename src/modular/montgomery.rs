//! Montgomery multiplication engine for odd moduli.

use super::{
    ModularOps,
    barrett::u64_limbs,
    reduction::{mod_neg_inv, montgomery_reduction},
};
use crate::{BigUint, Error, Limb, Result};

/// Reduction engine for an odd modulus `m >= 3`, keeping raw bases in Montgomery form
/// `x * R mod m` with `R = 2^(LIMBS * Limb::BITS)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MontgomeryOps<const BITS: u32, const LIMBS: usize> {
    /// The constant modulus
    modulus: BigUint<BITS, LIMBS>,
    /// Parameter used in Montgomery reduction
    one: BigUint<BITS, LIMBS>,
    /// R^2, used to move into Montgomery form
    r2: BigUint<BITS, LIMBS>,
    /// R^3, used to perform a multiplicative inverse
    r3: BigUint<BITS, LIMBS>,
    /// The lowest limbs of -(MODULUS^-1) mod R
    mod_neg_inv: Limb,
}

impl<const BITS: u32, const LIMBS: usize> MontgomeryOps<BITS, LIMBS> {
    /// Build the engine for an odd `modulus >= 3`, usable in `const` contexts.
    ///
    /// # Panics
    /// If `modulus` is even or smaller than `3`.
    pub const fn from_modulus(modulus: BigUint<BITS, LIMBS>) -> Self {
        assert!(
            modulus.is_odd() && modulus.bits() >= 2,
            "modulus must be odd and at least 3"
        );
        Self::compute(modulus)
    }

    /// Build the engine for `modulus`, returning [`Error::InvalidModulus`] unless it is odd and
    /// at least `3`.
    pub fn new(modulus: BigUint<BITS, LIMBS>) -> Result<Self> {
        if modulus.is_even() || modulus.bits() < 2 {
            return Err(Error::InvalidModulus);
        }
        Ok(Self::compute(modulus))
    }

    const fn compute(modulus: BigUint<BITS, LIMBS>) -> Self {
        let mod_neg_inv = mod_neg_inv(modulus.limbs[0]);

        // R mod m and R^2 mod m by repeated modular doubling of one.
        let r_bits = LIMBS as u32 * Limb::BITS;
        let mut one = BigUint::ONE;
        let mut i = 0;
        while i < r_bits {
            one = one.double_mod(&modulus);
            i += 1;
        }
        let mut r2 = one;
        while i < 2 * r_bits {
            r2 = r2.double_mod(&modulus);
            i += 1;
        }

        let (lo, hi) = r2.square_wide();
        let r3 = montgomery_reduction(&lo, &hi, &modulus, mod_neg_inv);

        Self {
            modulus,
            one,
            r2,
            r3,
            mod_neg_inv,
        }
    }

    /// `R^2 mod m`.
    pub const fn r2(&self) -> &BigUint<BITS, LIMBS> {
        &self.r2
    }

    /// `-m^-1 mod 2^Limb::BITS`.
    pub const fn mod_neg_inv(&self) -> Limb {
        self.mod_neg_inv
    }

    /// Montgomery product `a * b * R^-1 mod m`.
    #[inline]
    const fn mul_montgomery(
        &self,
        a: &BigUint<BITS, LIMBS>,
        b: &BigUint<BITS, LIMBS>,
    ) -> BigUint<BITS, LIMBS> {
        let (lo, hi) = a.split_mul(b);
        montgomery_reduction(&lo, &hi, &self.modulus, self.mod_neg_inv)
    }
}

impl<const BITS: u32, const LIMBS: usize> ModularOps for MontgomeryOps<BITS, LIMBS> {
    type Integer = BigUint<BITS, LIMBS>;

    #[inline]
    fn modulus(&self) -> Self::Integer {
        self.modulus
    }

    #[inline]
    fn one(&self) -> Self::Integer {
        self.one
    }

    #[inline]
    fn add(&self, a: &Self::Integer, b: &Self::Integer) -> Self::Integer {
        a.add_mod(b, &self.modulus)
    }

    #[inline]
    fn sub(&self, a: &Self::Integer, b: &Self::Integer) -> Self::Integer {
        a.sub_mod(b, &self.modulus)
    }

    #[inline]
    fn mul(&self, a: &Self::Integer, b: &Self::Integer) -> Self::Integer {
        self.mul_montgomery(a, b)
    }

    #[inline]
    fn neg(&self, a: &Self::Integer) -> Self::Integer {
        a.neg_mod(&self.modulus)
    }

    #[inline]
    fn double(&self, a: &Self::Integer) -> Self::Integer {
        a.double_mod(&self.modulus)
    }

    /// Any `x < 2^BITS` works here since `x * R^2 < m * R`.
    fn to_montgomery(&self, x: &Self::Integer) -> Self::Integer {
        self.mul_montgomery(x, &self.r2)
    }

    fn from_montgomery(&self, a: &Self::Integer) -> Self::Integer {
        montgomery_reduction(&a.limbs, &[Limb::ZERO; LIMBS], &self.modulus, self.mod_neg_inv)
    }

    fn from_u64(&self, x: u64) -> Self::Integer {
        self.from_limbs(&u64_limbs(x))
    }

    fn inverse(&self, a: &Self::Integer) -> Result<Self::Integer> {
        if a.is_zero() {
            return Err(Error::NotInvertible);
        }
        // (x R)^-1 = x^-1 R^-1, and one Montgomery product with R^3 restores the R factor.
        let inv = a.inv_odd_mod(&self.modulus)?;
        Ok(self.mul_montgomery(&inv, &self.r3))
    }

    fn from_limbs(&self, limbs: &[Limb]) -> Self::Integer {
        self.to_montgomery(&BigUint::rem_limbs(limbs, &self.modulus))
    }
}

#[cfg(test)]
mod tests {
    use super::MontgomeryOps;
    use crate::{BigUint, Error, ModularOps, U64, U256, nlimbs};

    type U7 = BigUint<7, { nlimbs(7) }>;
    type U224 = BigUint<224, { nlimbs(224) }>;

    const P224: U224 =
        U224::from_hex_literal("0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001");

    #[test]
    fn rejects_bad_moduli() {
        assert_eq!(MontgomeryOps::new(U64::ZERO), Err(Error::InvalidModulus));
        assert_eq!(MontgomeryOps::new(U64::ONE), Err(Error::InvalidModulus));
        assert_eq!(MontgomeryOps::new(U64::from_u64(10)), Err(Error::InvalidModulus));
    }

    #[test]
    #[should_panic(expected = "modulus must be odd")]
    fn from_modulus_panics_on_even() {
        let _ = MontgomeryOps::from_modulus(U64::from_u64(10));
    }

    #[test]
    fn round_trip() {
        let ops = MontgomeryOps::new(P224).unwrap();
        let x = U224::from_hex_literal("0xC5067EE5D80302E0561545A8467C6D5C98BC4D37672EB301C38CE9A9");
        let raw = ops.to_montgomery(&x);
        assert_ne!(raw, x);
        assert_eq!(ops.from_montgomery(&raw), x);
        assert_eq!(ops.from_montgomery(&ops.one()), U224::ONE);
    }

    #[test]
    fn p224_mul() {
        let ops = MontgomeryOps::new(P224).unwrap();
        let a = ops.to_montgomery(&U224::from_hex_literal(
            "0xC5067EE5D80302E0561545A8467C6D5C98BC4D37672EB301C38CE9A9",
        ));
        let b = ops.to_montgomery(&U224::from_hex_literal(
            "0xE632329C42040E595D127EB6889D22215DBE56F540425C705D6BF83",
        ));
        assert_eq!(
            ops.from_montgomery(&ops.mul(&a, &b)),
            U224::from_hex_literal("0x107BC09A9F3443A6F6458495ADD98CBA1FCD15F17D0EAB66302FEFA6")
        );
    }

    #[test]
    fn narrow_modulus() {
        let ops = MontgomeryOps::new(U7::from_u64(0x79)).unwrap();
        assert_eq!(ops.from_montgomery(&ops.from_u64(0x1234)), U7::from_u64(0x3E));
        let raw = ops.to_montgomery(&U7::MAX);
        assert_eq!(ops.from_montgomery(&raw), U7::from_u64(127 - 121));
    }

    #[test]
    fn secp256k1_inverse() {
        let p = U256::from_hex_literal(
            "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
        );
        let ops = MontgomeryOps::new(p).unwrap();
        let x = ops.to_montgomery(&U256::from_hex_literal(
            "0xb5d724ce6f44c3c587867bbcb417e9eb6fa05e7e2ef029166568f14eb3161387",
        ));
        let inv = ops.inverse(&x).unwrap();
        assert_eq!(ops.mul(&x, &inv), ops.one());
        assert_eq!(ops.inverse(&ops.zero()), Err(Error::NotInvertible));
    }

    #[test]
    fn const_construction() {
        const OPS: MontgomeryOps<256, { nlimbs(256) }> = MontgomeryOps::from_modulus(
            U256::from_hex_literal(
                "0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
            ),
        );
        assert_eq!(OPS, MontgomeryOps::new(OPS.modulus()).unwrap());
    }
}
