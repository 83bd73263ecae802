//! Modular addition.

use super::BigMod;
use crate::modular::{ModularOps, OpsStorage};

impl<S: OpsStorage> BigMod<S> {
    /// Computes `2 * self`.
    #[must_use]
    pub fn double(&self) -> Self {
        self.with_raw_base(self.ops().double(&self.raw_base))
    }
}

impl_big_mod_binop!(Add, add, AddAssign, add_assign, add);
