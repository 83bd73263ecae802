//! Modular exponentiation.

use super::BigMod;
use crate::{
    PowExponent,
    modular::{ModularOps, OpsStorage},
};

impl<S: OpsStorage> BigMod<S> {
    /// Computes `self^exp` for any unsigned exponent.
    ///
    /// Runs in time variable in `exp`. `x^0` is one, including for `x = 0`.
    #[must_use]
    pub fn pow_unsigned<E: PowExponent + ?Sized>(&self, exp: &E) -> Self {
        self.with_raw_base(self.ops().pow_unsigned(&self.raw_base, exp))
    }
}
