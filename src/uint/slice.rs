//! Variable-length limb slice routines backing division and the reduction engines.
//!
//! Slices are little-endian. Callers size their scratch buffers as flattened
//! `[[Limb; LIMBS]; N]` arrays so no heap allocation is needed.

use crate::{
    Limb, WideWord, Word,
    primitives::{borrowing_sub, carrying_add, div_wide},
};
use core::cmp::Ordering;

/// Number of limbs up to and including the most significant non-zero limb.
#[inline]
pub(crate) fn significant_limbs(a: &[Limb]) -> usize {
    a.iter().rposition(|l| !l.is_zero()).map_or(0, |i| i + 1)
}

/// Number of bits needed to represent the value.
#[inline]
pub(crate) fn bits(a: &[Limb]) -> u32 {
    match significant_limbs(a) {
        0 => 0,
        n => (n as u32 - 1) * Limb::BITS + a[n - 1].bits(),
    }
}

/// Compare two values of possibly different lengths.
pub(crate) fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    let len = a.len().max(b.len());
    for i in (0..len).rev() {
        let x = a.get(i).copied().unwrap_or(Limb::ZERO);
        let y = b.get(i).copied().unwrap_or(Limb::ZERO);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// `a -= b` where `b.len() <= a.len()`, returning the borrow out of the top of `a`.
pub(crate) fn sub_assign(a: &mut [Limb], b: &[Limb]) -> Limb {
    debug_assert!(b.len() <= a.len());
    let mut borrow = Limb::ZERO;
    for (i, limb) in a.iter_mut().enumerate() {
        let rhs = b.get(i).copied().unwrap_or(Limb::ZERO);
        (*limb, borrow) = limb.sbb(rhs, borrow);
    }
    borrow
}

/// `out = a * b`, truncated to `out.len()` limbs.
pub(crate) fn mul_into(a: &[Limb], b: &[Limb], out: &mut [Limb]) {
    out.fill(Limb::ZERO);
    for (i, &ai) in a.iter().enumerate() {
        if i >= out.len() {
            break;
        }
        let mut carry = Limb::ZERO;
        for (j, &bj) in b.iter().enumerate() {
            let k = i + j;
            if k >= out.len() {
                break;
            }
            (out[k], carry) = out[k].mac(ai, bj, carry);
        }
        if let Some(limb) = out.get_mut(i + b.len()) {
            *limb = carry;
        }
    }
}

/// `out = a >> shift`, truncated to `out.len()` limbs.
pub(crate) fn shr_into(a: &[Limb], shift: u32, out: &mut [Limb]) {
    let limb_shift = (shift / Limb::BITS) as usize;
    let bit_shift = shift % Limb::BITS;
    for (i, limb) in out.iter_mut().enumerate() {
        let src = i + limb_shift;
        let lo = a.get(src).map_or(0, |l| l.0);
        let hi = a.get(src + 1).map_or(0, |l| l.0);
        *limb = if bit_shift == 0 {
            Limb(lo)
        } else {
            Limb((lo >> bit_shift) | (hi << (Limb::BITS - bit_shift)))
        };
    }
}

/// Clear every bit at position `>= bits`.
pub(crate) fn truncate_bits(a: &mut [Limb], bits: u32) {
    let full = (bits / Limb::BITS) as usize;
    let rem = bits % Limb::BITS;
    for (i, limb) in a.iter_mut().enumerate() {
        if i > full || (i == full && rem == 0) {
            *limb = Limb::ZERO;
        } else if i == full {
            limb.0 &= (1 << rem) - 1;
        }
    }
}

/// Shift left by less than a limb, returning the bits shifted out of the top.
fn shl_small(a: &mut [Limb], shift: u32) -> Word {
    if shift == 0 {
        return 0;
    }
    let mut carry = 0;
    for limb in a.iter_mut() {
        let next = limb.0 >> (Limb::BITS - shift);
        limb.0 = (limb.0 << shift) | carry;
        carry = next;
    }
    carry
}

/// Shift right by less than a limb.
fn shr_small(a: &mut [Limb], shift: u32) {
    if shift == 0 {
        return;
    }
    let mut carry = 0;
    for limb in a.iter_mut().rev() {
        let next = limb.0 << (Limb::BITS - shift);
        limb.0 = (limb.0 >> shift) | carry;
        carry = next;
    }
}

/// Knuth's Algorithm D (TAOCP vol. 2, 4.3.1).
///
/// Divides `u` by `v`. On return `u[..]` holds the remainder and `q` the quotient, truncated to
/// `q.len()` limbs (callers size `q` so the quotient fits). `v` is used as scratch space for the
/// normalized divisor and is left shifted.
///
/// `u` must carry one spare most significant limb set to zero, and `v` must be non-zero.
pub(crate) fn div_rem(u: &mut [Limb], v: &mut [Limb], q: &mut [Limb]) {
    q.fill(Limb::ZERO);
    let n = significant_limbs(v);
    debug_assert!(n > 0, "division by zero");
    debug_assert_eq!(u.last().copied(), Some(Limb::ZERO));

    if cmp(u, v) == Ordering::Less {
        return;
    }

    if n == 1 {
        let d = v[0].0;
        let mut rem: Word = 0;
        for i in (0..u.len()).rev() {
            let (qi, ri) = div_wide(rem, u[i].0, d);
            if let Some(limb) = q.get_mut(i) {
                *limb = Limb(qi);
            } else {
                debug_assert_eq!(qi, 0);
            }
            rem = ri;
            u[i] = Limb::ZERO;
        }
        u[0] = Limb(rem);
        return;
    }

    // Normalize so the top limb of the divisor has its high bit set.
    let shift = v[n - 1].leading_zeros();
    shl_small(&mut v[..n], shift);
    let spill = shl_small(u, shift);
    debug_assert_eq!(spill, 0);

    let vh = v[n - 1].0 as WideWord;
    let vl = v[n - 2].0 as WideWord;
    let m = u.len() - 1 - n;

    for j in (0..=m).rev() {
        let num = ((u[j + n].0 as WideWord) << Limb::BITS) | u[j + n - 1].0 as WideWord;
        let mut qhat = num / vh;
        let mut rhat = num % vh;

        while qhat > Word::MAX as WideWord
            || qhat * vl > ((rhat << Limb::BITS) | u[j + n - 2].0 as WideWord)
        {
            qhat -= 1;
            rhat += vh;
            if rhat > Word::MAX as WideWord {
                break;
            }
        }

        // Multiply and subtract `qhat * v` from `u[j..=j + n]`.
        let mut qhat = qhat as Word;
        let mut carry: Word = 0;
        let mut borrow: Word = 0;
        for i in 0..n {
            let p = (qhat as WideWord) * (v[i].0 as WideWord) + carry as WideWord;
            carry = (p >> Limb::BITS) as Word;
            let (t, b) = borrowing_sub(u[i + j].0, p as Word, borrow);
            u[i + j] = Limb(t);
            borrow = b;
        }
        let (t, b) = borrowing_sub(u[j + n].0, carry, borrow);
        u[j + n] = Limb(t);

        // The estimate was one too large: add the divisor back.
        if b != 0 {
            qhat -= 1;
            let mut c: Word = 0;
            for i in 0..n {
                let (s, cc) = carrying_add(u[i + j].0, v[i].0, c);
                u[i + j] = Limb(s);
                c = cc;
            }
            u[j + n] = Limb(u[j + n].0.wrapping_add(c));
        }

        if let Some(limb) = q.get_mut(j) {
            *limb = Limb(qhat);
        } else {
            debug_assert_eq!(qhat, 0);
        }
    }

    // Denormalize the remainder.
    shr_small(&mut u[..n], shift);
    u[n..].fill(Limb::ZERO);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_and_significant_limbs() {
        assert_eq!(bits(&[Limb::ZERO, Limb::ZERO]), 0);
        assert_eq!(bits(&[Limb(5), Limb::ZERO]), 3);
        assert_eq!(bits(&[Limb::ZERO, Limb::ONE]), Limb::BITS + 1);
        assert_eq!(significant_limbs(&[Limb::ONE, Limb::ZERO, Limb::ZERO]), 1);
    }

    #[test]
    fn cmp_mixed_lengths() {
        assert_eq!(cmp(&[Limb(3)], &[Limb(3), Limb::ZERO]), Ordering::Equal);
        assert_eq!(cmp(&[Limb(3)], &[Limb(1), Limb::ONE]), Ordering::Less);
        assert_eq!(cmp(&[Limb(3), Limb::ONE], &[Limb(4)]), Ordering::Greater);
    }

    #[test]
    fn truncate_bits_keeps_low_bits() {
        let mut a = [Limb::MAX, Limb::MAX, Limb::MAX];
        truncate_bits(&mut a, Limb::BITS + 3);
        assert_eq!(a, [Limb::MAX, Limb(0b111), Limb::ZERO]);

        let mut b = [Limb::MAX, Limb::MAX];
        truncate_bits(&mut b, Limb::BITS);
        assert_eq!(b, [Limb::MAX, Limb::ZERO]);
    }

    #[test]
    fn mul_into_truncates() {
        let mut out = [Limb::ZERO; 2];
        mul_into(&[Limb::MAX, Limb::MAX], &[Limb(2)], &mut out);
        assert_eq!(out, [Limb(Word::MAX - 1), Limb::MAX]);
    }

    #[test]
    fn shr_into_across_limbs() {
        let mut out = [Limb::ZERO; 2];
        shr_into(&[Limb::ZERO, Limb(0b110), Limb::ONE], Limb::BITS + 1, &mut out);
        assert_eq!(out, [Limb(0b11 | 1 << (Limb::BITS - 1)), Limb::ZERO]);
    }

    #[test]
    fn div_rem_single_limb() {
        let mut u = [Limb(7), Limb(1), Limb::ZERO];
        let mut v = [Limb(2), Limb::ZERO];
        let mut q = [Limb::ZERO; 2];
        div_rem(&mut u, &mut v, &mut q);
        assert_eq!(q, [Limb(3 | 1 << (Limb::BITS - 1)), Limb::ZERO]);
        assert_eq!(u, [Limb::ONE, Limb::ZERO, Limb::ZERO]);
    }

    #[test]
    fn div_rem_multi_limb_exact() {
        // (2^W + 1) * (2^W - 1) = 2^2W - 1
        let mut u = [Limb::MAX, Limb::MAX, Limb::ZERO];
        let mut v = [Limb::ONE, Limb::ONE];
        let mut q = [Limb::ZERO; 2];
        div_rem(&mut u, &mut v, &mut q);
        assert_eq!(q, [Limb::MAX, Limb::ZERO]);
        assert_eq!(u, [Limb::ZERO; 3]);
    }

    #[test]
    fn div_rem_smaller_dividend() {
        let mut u = [Limb(5), Limb::ZERO, Limb::ZERO];
        let mut v = [Limb::ZERO, Limb::ONE];
        let mut q = [Limb::ZERO; 2];
        div_rem(&mut u, &mut v, &mut q);
        assert_eq!(q, [Limb::ZERO; 2]);
        assert_eq!(u, [Limb(5), Limb::ZERO, Limb::ZERO]);
    }
}
