//! Montgomery reduction.

use crate::{BigUint, Limb};

/// Algorithm 14.32 in Handbook of Applied Cryptography <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>
///
/// Computes `(lower, upper) * R^-1 mod modulus` where `R = 2^(LIMBS * Limb::BITS)`, given a
/// double-width input below `modulus * R` and `mod_neg_inv = -modulus^-1 mod 2^Limb::BITS`.
pub(crate) const fn montgomery_reduction<const BITS: u32, const LIMBS: usize>(
    lower: &[Limb; LIMBS],
    upper: &[Limb; LIMBS],
    modulus: &BigUint<BITS, LIMBS>,
    mod_neg_inv: Limb,
) -> BigUint<BITS, LIMBS> {
    let mut lower = *lower;
    let mut upper = *upper;
    let mut meta_carry = Limb::ZERO;
    let mut new_sum;

    let mut i = 0;
    while i < LIMBS {
        let u = lower[i].wrapping_mul(mod_neg_inv);

        let (_, mut carry) = lower[i].mac(u, modulus.limbs[0], Limb::ZERO);
        let mut new_limb;

        let mut j = 1;
        while j < (LIMBS - i) {
            (new_limb, carry) = lower[i + j].mac(u, modulus.limbs[j], carry);
            lower[i + j] = new_limb;
            j += 1;
        }
        while j < LIMBS {
            (new_limb, carry) = upper[i + j - LIMBS].mac(u, modulus.limbs[j], carry);
            upper[i + j - LIMBS] = new_limb;
            j += 1;
        }

        (new_sum, meta_carry) = upper[i].adc(carry, meta_carry);
        upper[i] = new_sum;

        i += 1;
    }

    // Division is simply taking the upper half of the limbs.
    // At this point the value is below 2 * modulus, so `meta_carry` is either 0 or 1.
    BigUint::sub_mod_with_carry(upper, meta_carry, modulus)
}

/// Computes `-m^-1 mod 2^Limb::BITS` for an odd limb `m` by Newton iteration.
pub(crate) const fn mod_neg_inv(m: Limb) -> Limb {
    debug_assert!(m.is_odd());

    // `m * m = 1 (mod 8)` gives 3 correct bits; each step doubles them.
    let mut inv = m;
    let mut i = 0;
    while i < 6 {
        let t = Limb(2).wrapping_sub(m.wrapping_mul(inv));
        inv = inv.wrapping_mul(t);
        i += 1;
    }

    inv.wrapping_neg()
}
