//! Modular inversion.

use super::BigMod;
use crate::{
    Result,
    modular::{ModularOps, OpsStorage},
};

impl<S: OpsStorage> BigMod<S> {
    /// Computes `self^-1`.
    ///
    /// Returns [`Error::NotInvertible`][`crate::Error::NotInvertible`] for zero and for values
    /// sharing a factor with the modulus.
    pub fn inverse(&self) -> Result<Self> {
        let raw_base = self.ops().inverse(&self.raw_base)?;
        Ok(self.with_raw_base(raw_base))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        BigUint, Error, U64, nlimbs,
        modular::{BabyBear, BabyBearOps, BarrettOps, BigMod, BigModCt, MontgomeryOps},
    };

    type U7 = BigUint<7, { nlimbs(7) }>;

    crate::montgomery_modulus!(Mod79, U7, "0x79");

    #[test]
    fn inverse_composite_odd_modulus() {
        // 0x79 = 121 = 11^2
        let x = BigModCt::<Mod79>::from(10);
        assert!((x * x.inverse().unwrap()).is_one());
        assert_eq!(BigModCt::<Mod79>::from(22).inverse(), Err(Error::NotInvertible));
        assert_eq!(BigModCt::<Mod79>::from(0).inverse(), Err(Error::NotInvertible));
    }

    #[test]
    fn inverse_even_modulus() {
        let ops = BarrettOps::new(U64::from_u64(1 << 20)).unwrap();
        let x = BigMod::from_u64(12345, &ops);
        assert!((x * x.inverse().unwrap()).is_one());
        assert_eq!(BigMod::from_u64(2, &ops).inverse(), Err(Error::NotInvertible));
    }

    #[test]
    fn inverse_runtime_montgomery() {
        let ops = MontgomeryOps::new(U64::from_u64(0xFFFF_FFFF_FFFF_FFC5)).unwrap();
        for v in [1u64, 2, 3, 0xFFFF_FFFF_FFFF_FFC4] {
            let x = BigMod::from_u64(v, ops);
            assert!((x * x.inverse().unwrap()).is_one(), "{v}");
        }
    }

    #[test]
    fn inverse_babybear() {
        let x = BabyBear::from_u64(2, BabyBearOps);
        assert_eq!(x.inverse().unwrap().retrieve(), 0x3C00_0001);
    }
}
