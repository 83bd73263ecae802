use crate::{WideWord, Word};

/// Computes `lhs + rhs + carry`, returning the result along with the new carry (0, 1, or 2).
#[inline(always)]
pub(crate) const fn carrying_add(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
    let a = lhs as WideWord;
    let b = rhs as WideWord;
    let carry = carry as WideWord;
    let ret = a + b + carry;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `lhs - (rhs + borrow)`, returning the result along with the new borrow (0 or 1).
#[inline(always)]
pub(crate) const fn borrowing_sub(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word) {
    let (ret, b1) = lhs.overflowing_sub(rhs);
    let (ret, b2) = ret.overflowing_sub(borrow);
    (ret, (b1 | b2) as Word)
}

/// Computes `lhs * rhs`, returning the low and the high words of the result.
#[inline(always)]
pub(crate) const fn widening_mul(lhs: Word, rhs: Word) -> (Word, Word) {
    let a = lhs as WideWord;
    let b = rhs as WideWord;
    let ret = a * b;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `(lhs * rhs) + addend + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn carrying_mul_add(
    lhs: Word,
    rhs: Word,
    addend: Word,
    carry: Word,
) -> (Word, Word) {
    let lhs = lhs as WideWord;
    let rhs = rhs as WideWord;
    let addend = addend as WideWord;
    let carry = carry as WideWord;

    // Cannot overflow:
    // (2^W-1) * (2^W-1) + (2^W-1) + (2^W-1) = 2^2W - 1
    let ret = ((lhs * rhs) + addend) + carry;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Divides the two-word value `(hi, lo)` by `d`, returning the quotient and remainder.
///
/// Requires `hi < d` so that the quotient fits in a single word.
#[inline(always)]
pub(crate) const fn div_wide(hi: Word, lo: Word, d: Word) -> (Word, Word) {
    debug_assert!(hi < d);
    let n = ((hi as WideWord) << Word::BITS) | (lo as WideWord);
    let d = d as WideWord;
    ((n / d) as Word, (n % d) as Word)
}
