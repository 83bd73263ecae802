//! Modular multiplication.

use super::BigMod;
use crate::modular::{ModularOps, OpsStorage};

impl<S: OpsStorage> BigMod<S> {
    /// Computes `self * self`.
    #[must_use]
    pub fn square(&self) -> Self {
        self.with_raw_base(self.ops().square(&self.raw_base))
    }
}

impl_big_mod_binop!(Mul, mul, MulAssign, mul_assign, mul);
