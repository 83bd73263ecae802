//! Macros declaring compile-time moduli.

#[cfg(doc)]
use crate::modular::{BigModCt, ConstModulus};

/// Create a zero-sized type implementing [`ConstModulus`] with a [`MontgomeryOps`] engine, given
/// a name, a [`BigUint`] type, the modulus as a `0x`-prefixed hex literal, and an optional
/// documentation string.
///
/// # Usage
///
/// ```
/// use crypto_multiprecision::{U256, modular::BigModCt, montgomery_modulus};
///
/// montgomery_modulus!(
///     Bls12381Scalar,
///     U256,
///     "0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
///     "Scalar field of BLS12-381"
/// );
///
/// let x = BigModCt::<Bls12381Scalar>::from(5);
/// assert_eq!(x.inverse().unwrap() * x, BigModCt::<Bls12381Scalar>::from(1));
/// ```
///
/// The engine is built in a `static` at compile time. The modulus _must_ be odd and at least `3`,
/// or compilation fails.
///
/// [`MontgomeryOps`]: crate::modular::MontgomeryOps
/// [`BigUint`]: crate::BigUint
#[macro_export]
macro_rules! montgomery_modulus {
    ($name:ident, $uint_type:ty, $value:expr) => {
        $crate::montgomery_modulus!(
            $name,
            $uint_type,
            $value,
            "Modulus which impls `ConstModulus` with a Montgomery engine"
        );
    };
    ($name:ident, $uint_type:ty, $value:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
        pub struct $name;

        impl $crate::modular::ConstModulus for $name {
            type Ops =
                $crate::modular::MontgomeryOps<{ <$uint_type>::BITS }, { <$uint_type>::LIMBS }>;

            fn ops() -> &'static Self::Ops {
                static OPS: $crate::modular::MontgomeryOps<
                    { <$uint_type>::BITS },
                    { <$uint_type>::LIMBS },
                > = $crate::modular::MontgomeryOps::from_modulus(
                    <$uint_type>::from_hex_literal($value),
                );
                &OPS
            }
        }
    };
}

/// Create a zero-sized type implementing [`ConstModulus`] with a [`BarrettOps`] engine, given a
/// name, a [`BigUint`] type, the modulus as a `0x`-prefixed hex literal, and an optional
/// documentation string.
///
/// # Usage
///
/// ```
/// use crypto_multiprecision::{U64, barrett_modulus, modular::BigModCt};
///
/// barrett_modulus!(Mod120, U64, "0x78");
///
/// let x = BigModCt::<Mod120>::from(0x1234);
/// assert_eq!(x.retrieve(), U64::from_u64(0x64));
/// ```
///
/// Any non-zero modulus is accepted; zero fails compilation.
///
/// [`BarrettOps`]: crate::modular::BarrettOps
/// [`BigUint`]: crate::BigUint
#[macro_export]
macro_rules! barrett_modulus {
    ($name:ident, $uint_type:ty, $value:expr) => {
        $crate::barrett_modulus!(
            $name,
            $uint_type,
            $value,
            "Modulus which impls `ConstModulus` with a Barrett engine"
        );
    };
    ($name:ident, $uint_type:ty, $value:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
        pub struct $name;

        impl $crate::modular::ConstModulus for $name {
            type Ops =
                $crate::modular::BarrettOps<{ <$uint_type>::BITS }, { <$uint_type>::LIMBS }>;

            fn ops() -> &'static Self::Ops {
                static OPS: $crate::modular::BarrettOps<
                    { <$uint_type>::BITS },
                    { <$uint_type>::LIMBS },
                > = $crate::modular::BarrettOps::from_modulus(
                    <$uint_type>::from_hex_literal($value),
                );
                &OPS
            }
        }
    };
}
