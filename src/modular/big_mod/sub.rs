//! Modular subtraction.

use super::BigMod;
use crate::modular::{ModularOps, OpsStorage};

impl_big_mod_binop!(Sub, sub, SubAssign, sub_assign, sub);
