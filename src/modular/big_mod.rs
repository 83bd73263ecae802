//! Residues modulo a fixed modulus.

/// Implements a binary operator, its reference forms, a `u64` right-hand side and the assigning
/// forms on top of a `ModularOps` method.
macro_rules! impl_big_mod_binop {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $ops_fn:ident) => {
        impl<S: OpsStorage> core::ops::$op<&BigMod<S>> for &BigMod<S> {
            type Output = BigMod<S>;

            #[inline]
            fn $op_fn(self, rhs: &BigMod<S>) -> BigMod<S> {
                self.debug_assert_same_modulus(rhs);
                self.with_raw_base(self.ops().$ops_fn(&self.raw_base, &rhs.raw_base))
            }
        }

        impl<S: OpsStorage> core::ops::$op<BigMod<S>> for &BigMod<S> {
            type Output = BigMod<S>;

            #[inline]
            #[allow(clippy::op_ref)]
            fn $op_fn(self, rhs: BigMod<S>) -> BigMod<S> {
                core::ops::$op::$op_fn(self, &rhs)
            }
        }

        impl<S: OpsStorage> core::ops::$op<&BigMod<S>> for BigMod<S> {
            type Output = BigMod<S>;

            #[inline]
            #[allow(clippy::op_ref)]
            fn $op_fn(self, rhs: &BigMod<S>) -> BigMod<S> {
                core::ops::$op::$op_fn(&self, rhs)
            }
        }

        impl<S: OpsStorage> core::ops::$op<BigMod<S>> for BigMod<S> {
            type Output = BigMod<S>;

            #[inline]
            fn $op_fn(self, rhs: BigMod<S>) -> BigMod<S> {
                core::ops::$op::$op_fn(&self, &rhs)
            }
        }

        impl<S: OpsStorage> core::ops::$op<u64> for &BigMod<S> {
            type Output = BigMod<S>;

            #[inline]
            fn $op_fn(self, rhs: u64) -> BigMod<S> {
                let rhs = self.ops().from_u64(rhs);
                self.with_raw_base(self.ops().$ops_fn(&self.raw_base, &rhs))
            }
        }

        impl<S: OpsStorage> core::ops::$op<u64> for BigMod<S> {
            type Output = BigMod<S>;

            #[inline]
            fn $op_fn(self, rhs: u64) -> BigMod<S> {
                core::ops::$op::$op_fn(&self, rhs)
            }
        }

        impl<S: OpsStorage> core::ops::$assign<&BigMod<S>> for BigMod<S> {
            #[inline]
            fn $assign_fn(&mut self, rhs: &BigMod<S>) {
                self.debug_assert_same_modulus(rhs);
                self.raw_base = self.ops().$ops_fn(&self.raw_base, &rhs.raw_base);
            }
        }

        impl<S: OpsStorage> core::ops::$assign<BigMod<S>> for BigMod<S> {
            #[inline]
            fn $assign_fn(&mut self, rhs: BigMod<S>) {
                core::ops::$assign::$assign_fn(self, &rhs);
            }
        }

        impl<S: OpsStorage> core::ops::$assign<u64> for BigMod<S> {
            #[inline]
            fn $assign_fn(&mut self, rhs: u64) {
                let rhs = self.ops().from_u64(rhs);
                self.raw_base = self.ops().$ops_fn(&self.raw_base, &rhs);
            }
        }
    };
}

mod add;
mod inv;
mod mul;
mod neg;
mod pow;
mod sqrt;
mod sub;

use super::{
    BabyBearOps, BarrettOps, ConstModulus, ConstOps, GoldilocksOps, Mersenne31Ops, ModularOps,
    MontgomeryOps, OpsStorage,
};
use crate::{BigUint, Limb};
use core::{
    fmt,
    hash::{Hash, Hasher},
};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[cfg(feature = "rand_core")]
use rand_core::RngCore;

/// Integer type of the engine behind storage `S`.
pub type BigModInteger<S> = <<S as OpsStorage>::Ops as ModularOps>::Integer;

/// An element of `Z / mZ`.
///
/// Holds the *raw base* (the engine's internal representation of the residue, see
/// [`ModularOps`]) together with the storage through which the engine is reached. Arithmetic
/// between two values assumes they share a modulus: for compile-time storage this is enforced by
/// the type, for runtime storage it is a debug assertion.
///
/// ```
/// use crypto_multiprecision::{U256, modular::BigModCt, montgomery_modulus};
///
/// montgomery_modulus!(
///     Secp256k1Field,
///     U256,
///     "0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
/// );
/// type Fe = BigModCt<Secp256k1Field>;
///
/// let x = Fe::from(3);
/// assert_eq!((x * x + 1).retrieve(), U256::from_u64(10));
/// ```
pub struct BigMod<S: OpsStorage> {
    raw_base: BigModInteger<S>,
    storage: S,
}

/// Residue modulo a compile-time modulus `M`.
pub type BigModCt<M> = BigMod<ConstOps<M>>;

/// Residue modulo an odd runtime modulus, carrying its Montgomery engine by value.
pub type MontgomeryBigModRt<const BITS: u32, const LIMBS: usize> =
    BigMod<MontgomeryOps<BITS, LIMBS>>;

/// Residue modulo a runtime modulus, carrying its Barrett engine by value.
pub type BarrettBigModRt<const BITS: u32, const LIMBS: usize> = BigMod<BarrettOps<BITS, LIMBS>>;

/// Element of the Goldilocks field.
pub type Goldilocks = BigMod<GoldilocksOps>;

/// Element of the Mersenne31 field.
pub type Mersenne31 = BigMod<Mersenne31Ops>;

/// Element of the BabyBear field.
pub type BabyBear = BigMod<BabyBearOps>;

impl<S: OpsStorage> BigMod<S> {
    /// Reduce `x` (any value of the integer type) modulo the modulus of `storage`.
    pub fn new(x: &BigModInteger<S>, storage: S) -> Self {
        let raw_base = storage.ops().to_montgomery(x);
        Self { raw_base, storage }
    }

    /// Reduce a `u64` modulo the modulus of `storage`.
    pub fn from_u64(x: u64, storage: S) -> Self {
        let raw_base = storage.ops().from_u64(x);
        Self { raw_base, storage }
    }

    /// Reduce an integer of any width modulo the modulus of `storage`.
    pub fn from_uint<const BITS: u32, const LIMBS: usize>(
        x: &BigUint<BITS, LIMBS>,
        storage: S,
    ) -> Self {
        Self::from_limbs(x.as_limbs(), storage)
    }

    /// Reduce a little-endian limb slice modulo the modulus of `storage`.
    pub fn from_limbs(limbs: &[Limb], storage: S) -> Self {
        let raw_base = storage.ops().from_limbs(limbs);
        Self { raw_base, storage }
    }

    /// Zero.
    pub fn zero(storage: S) -> Self {
        let raw_base = storage.ops().zero();
        Self { raw_base, storage }
    }

    /// One.
    pub fn one(storage: S) -> Self {
        let raw_base = storage.ops().one();
        Self { raw_base, storage }
    }

    /// Wrap a raw base already in the engine's representation.
    ///
    /// `raw_base` must be below the modulus.
    pub fn from_raw_base(raw_base: BigModInteger<S>, storage: S) -> Self {
        debug_assert!(raw_base < storage.ops().modulus(), "raw base out of range");
        Self { raw_base, storage }
    }

    /// The canonical residue in `[0, m)`.
    pub fn retrieve(&self) -> BigModInteger<S> {
        self.ops().from_montgomery(&self.raw_base)
    }

    /// The raw base in the engine's representation.
    pub fn raw_base(&self) -> &BigModInteger<S> {
        &self.raw_base
    }

    /// The modulus.
    pub fn modulus(&self) -> BigModInteger<S> {
        self.ops().modulus()
    }

    /// The engine.
    pub fn ops(&self) -> &S::Ops {
        self.storage.ops()
    }

    /// The storage handle.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Is this zero?
    pub fn is_zero(&self) -> bool {
        self.ops().is_zero(&self.raw_base)
    }

    /// Is this one?
    pub fn is_one(&self) -> bool {
        self.raw_base == self.ops().one()
    }

    /// A value sharing this one's storage.
    #[inline]
    pub(crate) fn with_raw_base(&self, raw_base: BigModInteger<S>) -> Self {
        Self {
            raw_base,
            storage: self.storage.clone(),
        }
    }

    #[inline]
    pub(crate) fn debug_assert_same_modulus(&self, other: &Self) {
        debug_assert!(
            self.storage.compare_eq(&other.storage),
            "operands have different moduli"
        );
    }

    /// Draw a residue statistically close to uniform (bias below `2^-64`).
    ///
    /// Runs in variable time.
    #[cfg(feature = "rand_core")]
    pub fn random<R: RngCore + ?Sized>(rng: &mut R, storage: S) -> Self {
        use crate::PowExponent;

        let ops = storage.ops();
        let half = ops.from_u64(1 << 32);
        let radix = ops.square(&half);

        let words = ops.modulus().exponent_bits().div_ceil(64) + 1;
        let mut acc = ops.zero();
        for _ in 0..words {
            acc = ops.mul(&acc, &radix);
            acc = ops.add(&acc, &ops.from_u64(rng.next_u64()));
        }

        Self {
            raw_base: acc,
            storage,
        }
    }
}

impl<S: OpsStorage + Default> BigMod<S> {
    /// Reduce `x` modulo the compile-time modulus.
    pub fn from_integer(x: &BigModInteger<S>) -> Self {
        Self::new(x, S::default())
    }
}

impl<M: ConstModulus> BigModCt<M> {
    /// The compile-time engine.
    pub fn const_ops() -> &'static M::Ops {
        M::ops()
    }
}

impl<S: OpsStorage> Clone for BigMod<S> {
    fn clone(&self) -> Self {
        Self {
            raw_base: self.raw_base,
            storage: self.storage.clone(),
        }
    }
}

impl<S: OpsStorage + Copy> Copy for BigMod<S> {}

impl<S: OpsStorage> fmt::Debug for BigMod<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigMod")
            .field("value", &self.retrieve())
            .field("modulus", &self.modulus())
            .finish()
    }
}

impl<S: OpsStorage> fmt::Display for BigMod<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.retrieve(), f)
    }
}

impl<S: OpsStorage> fmt::LowerHex for BigMod<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.retrieve(), f)
    }
}

impl<S: OpsStorage> fmt::UpperHex for BigMod<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.retrieve(), f)
    }
}

impl<S: OpsStorage> PartialEq for BigMod<S> {
    fn eq(&self, other: &Self) -> bool {
        self.debug_assert_same_modulus(other);
        self.raw_base == other.raw_base
    }
}

impl<S: OpsStorage> Eq for BigMod<S> {}

impl<S: OpsStorage> Hash for BigMod<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw_base.hash(state);
    }
}

impl<S: OpsStorage> ConstantTimeEq for BigMod<S>
where
    BigModInteger<S>: ConstantTimeEq,
{
    fn ct_eq(&self, other: &Self) -> Choice {
        self.debug_assert_same_modulus(other);
        self.raw_base.ct_eq(&other.raw_base)
    }
}

impl<S: OpsStorage + Copy> ConditionallySelectable for BigMod<S>
where
    BigModInteger<S>: ConditionallySelectable,
{
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        a.debug_assert_same_modulus(b);
        a.with_raw_base(<BigModInteger<S> as ConditionallySelectable>::conditional_select(
            &a.raw_base,
            &b.raw_base,
            choice,
        ))
    }
}

impl<S: OpsStorage + Default> Default for BigMod<S> {
    fn default() -> Self {
        Self::zero(S::default())
    }
}

impl<S: OpsStorage + Default> From<u64> for BigMod<S> {
    fn from(x: u64) -> Self {
        Self::from_u64(x, S::default())
    }
}

impl<S: OpsStorage + Default> num_traits::Zero for BigMod<S> {
    fn zero() -> Self {
        Self::zero(S::default())
    }

    fn is_zero(&self) -> bool {
        BigMod::is_zero(self)
    }
}

impl<S: OpsStorage + Default> num_traits::One for BigMod<S> {
    fn one() -> Self {
        Self::one(S::default())
    }

    fn is_one(&self) -> bool {
        BigMod::is_one(self)
    }
}
