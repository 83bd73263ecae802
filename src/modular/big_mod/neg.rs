//! Modular negation.

use super::BigMod;
use crate::modular::{ModularOps, OpsStorage};
use core::ops::Neg;

impl<S: OpsStorage> Neg for &BigMod<S> {
    type Output = BigMod<S>;

    fn neg(self) -> BigMod<S> {
        self.with_raw_base(ModularOps::neg(self.ops(), &self.raw_base))
    }
}

impl<S: OpsStorage> Neg for BigMod<S> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use crate::modular::{Mersenne31, Mersenne31Ops};

    #[test]
    fn neg() {
        let x = Mersenne31::from_u64(5, Mersenne31Ops);
        assert_eq!((-x).retrieve(), 0x7FFF_FFFA);
        assert!((x + -x).is_zero());
        assert!((-Mersenne31::zero(Mersenne31Ops)).is_zero());
    }
}
