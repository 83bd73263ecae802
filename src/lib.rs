//! Fixed-width multiprecision integers and modular arithmetic for proof systems.
//!
//! # About
//! [`BigUint<BITS, LIMBS>`][`BigUint`] is an unsigned integer of exactly `BITS` bits, including
//! widths that are not a multiple of the limb size. On top of it the [`modular`] module provides
//! reduction engines (Barrett, Montgomery, and dedicated Goldilocks, Mersenne31 and BabyBear
//! fields) and the [`BigMod`][`modular::BigMod`] residue type.
//!
//! # Goals
//! - No heap allocations i.e. `no_std`-friendly.
//! - Moduli fixed at compile time live in `static` engines built by `const fn`s.
//! - One arithmetic contract, [`ModularOps`], shared by every engine, so generic code runs
//!   unchanged on any field.
//!
//! # Constant time
//! Engine arithmetic (`add`, `sub`, `mul`, `neg`) has no secret-dependent branches on the big
//! engines, but exponentiation, inversion and square roots run in variable time. Do not use this
//! crate where those operations touch secrets.
//!
//! # Usage
//!
//! ```
//! use crypto_multiprecision::{U256, modular::BigModCt, montgomery_modulus};
//!
//! montgomery_modulus!(
//!     P256,
//!     U256,
//!     "0xffffffff00000001000000000000000000000000ffffffffffffffffffffffff"
//! );
//!
//! let x = BigModCt::<P256>::from(4);
//! let root = x.sqrt().unwrap();
//! assert_eq!(root * root, x);
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

mod decimal;
mod error;
mod jacobi;
mod limb;
mod primitives;
mod traits;
mod uint;
mod word;

pub mod modular;

pub use crate::{
    error::{Error, ParseError, Result},
    jacobi::JacobiSymbol,
    limb::{Limb, nlimbs},
    modular::ModularOps,
    traits::*,
    uint::*,
    word::{WideWord, Word},
};
pub use subtle;

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
