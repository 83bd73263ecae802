//! Where a [`BigMod`][`super::BigMod`] finds its engine.

use super::{
    BabyBearOps, BarrettOps, GoldilocksOps, Mersenne31Ops, ModularOps, MontgomeryOps,
};
use core::{fmt::Debug, hash::Hash, marker::PhantomData};

#[cfg(feature = "alloc")]
use alloc::sync::Arc;

/// Handle through which a [`BigMod`][`super::BigMod`] reaches its [`ModularOps`] engine.
///
/// Implemented for:
/// - [`ConstOps<M>`]: zero-sized handle to an engine fixed at compile time by `M`,
/// - every engine type of this crate itself, stored by value,
/// - `&O`, borrowing a shared engine,
/// - `Arc<O>` (with the `alloc` feature).
pub trait OpsStorage: Clone + Debug {
    /// The engine type.
    type Ops: ModularOps;

    /// Borrow the engine.
    fn ops(&self) -> &Self::Ops;

    /// Do both handles refer to engines for the same modulus?
    fn compare_eq(&self, other: &Self) -> bool {
        self.ops() == other.ops()
    }
}

/// A modulus fixed at compile time.
///
/// Implementations are zero-sized marker types produced by
/// [`montgomery_modulus!`][`crate::montgomery_modulus`] and
/// [`barrett_modulus!`][`crate::barrett_modulus`], each holding its engine in a `static`.
pub trait ConstModulus: Copy + Debug + Default + Eq + Hash + Send + Sync + 'static {
    /// The engine type.
    type Ops: ModularOps + 'static;

    /// The engine for this modulus.
    fn ops() -> &'static Self::Ops;
}

/// Zero-sized storage for a compile-time modulus `M`.
#[derive(Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConstOps<M: ConstModulus>(PhantomData<M>);

impl<M: ConstModulus> ConstOps<M> {
    /// Create the handle.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<M: ConstModulus> Clone for ConstOps<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: ConstModulus> Copy for ConstOps<M> {}

impl<M: ConstModulus> OpsStorage for ConstOps<M> {
    type Ops = M::Ops;

    #[inline(always)]
    fn ops(&self) -> &M::Ops {
        M::ops()
    }

    #[inline(always)]
    fn compare_eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<const BITS: u32, const LIMBS: usize> OpsStorage for BarrettOps<BITS, LIMBS> {
    type Ops = Self;

    #[inline(always)]
    fn ops(&self) -> &Self {
        self
    }
}

impl<const BITS: u32, const LIMBS: usize> OpsStorage for MontgomeryOps<BITS, LIMBS> {
    type Ops = Self;

    #[inline(always)]
    fn ops(&self) -> &Self {
        self
    }
}

/// Zero-sized engines are their own storage.
macro_rules! impl_by_value_storage {
    ($($ty:ty),+) => {
        $(
            impl OpsStorage for $ty {
                type Ops = Self;

                #[inline(always)]
                fn ops(&self) -> &Self {
                    self
                }
            }
        )+
    };
}

impl_by_value_storage!(GoldilocksOps, Mersenne31Ops, BabyBearOps);

impl<O: ModularOps> OpsStorage for &O {
    type Ops = O;

    #[inline(always)]
    fn ops(&self) -> &O {
        self
    }
}

#[cfg(feature = "alloc")]
impl<O: ModularOps> OpsStorage for Arc<O> {
    type Ops = O;

    #[inline(always)]
    fn ops(&self) -> &O {
        self
    }
}
