//! Equivalence tests between `crypto_multiprecision::BigUint` and `num-bigint`.

mod common;

use common::{pow2, to_biguint, to_uint};
use crypto_multiprecision::{BigUint as Uint, Error, U64, U256, nlimbs};
use num_bigint::BigUint;
use num_integer::Integer;
use num_modular::ModularUnaryOps;
use proptest::prelude::*;

type U133 = Uint<133, { nlimbs(133) }>;

prop_compose! {
    fn uint()(bytes in any::<[u8; 32]>()) -> U256 {
        U256::from_le_slice(&bytes).unwrap()
    }
}
prop_compose! {
    /// 133-bit values: the top byte keeps only its low five bits.
    fn uint133()(mut bytes in any::<[u8; 17]>()) -> U133 {
        bytes[16] &= 0x1f;
        U133::from_le_slice(&bytes).unwrap()
    }
}
prop_compose! {
    fn nonzero()(n in uint()) -> U256 {
        if n.is_zero() { U256::ONE } else { n }
    }
}
prop_compose! {
    /// A modulus of at least two.
    fn modulus()(n in uint()) -> U256 {
        if n.bits() < 2 { U256::from_u64(2) } else { n }
    }
}

proptest! {
    #[test]
    fn wrapping_add(a in uint(), b in uint()) {
        let expected = (to_biguint(&a) + to_biguint(&b)) % pow2(256);
        prop_assert_eq!(to_biguint(&a.wrapping_add(&b)), expected);
    }

    #[test]
    fn checked_add(a in uint(), b in uint()) {
        let sum = to_biguint(&a) + to_biguint(&b);
        match a.checked_add(&b) {
            Ok(actual) => prop_assert_eq!(to_biguint(&actual), sum),
            Err(err) => {
                prop_assert_eq!(err, Error::Overflow);
                prop_assert!(sum >= pow2(256));
            }
        }
    }

    #[test]
    fn wrapping_sub(a in uint(), b in uint()) {
        let expected = (to_biguint(&a) + pow2(256) - to_biguint(&b)) % pow2(256);
        prop_assert_eq!(to_biguint(&a.wrapping_sub(&b)), expected);
    }

    #[test]
    fn wrapping_mul(a in uint(), b in uint()) {
        let expected = (to_biguint(&a) * to_biguint(&b)) % pow2(256);
        prop_assert_eq!(to_biguint(&a.wrapping_mul(&b)), expected);
    }

    #[test]
    fn div_rem(a in uint(), b in nonzero()) {
        let (q, r) = a.div_rem(&b).unwrap();
        let (q_bi, r_bi) = to_biguint(&a).div_rem(&to_biguint(&b));
        prop_assert_eq!(to_biguint(&q), q_bi);
        prop_assert_eq!(to_biguint(&r), r_bi);
    }

    #[test]
    fn shifts(a in uint(), shift in 0u32..300) {
        let a_bi = to_biguint(&a);
        prop_assert_eq!(to_biguint(&a.shl_vartime(shift)), (&a_bi << shift) % pow2(256));
        prop_assert_eq!(to_biguint(&a.shr_vartime(shift)), &a_bi >> shift);
    }

    #[test]
    fn bits(a in uint()) {
        prop_assert_eq!(u64::from(a.bits()), to_biguint(&a).bits());
    }

    #[test]
    fn odd_width_arithmetic(a in uint133(), b in uint133()) {
        let (a_bi, b_bi) = (to_biguint(&a), to_biguint(&b));
        prop_assert_eq!(to_biguint(&a.wrapping_add(&b)), (&a_bi + &b_bi) % pow2(133));
        prop_assert_eq!(to_biguint(&a.wrapping_mul(&b)), (&a_bi * &b_bi) % pow2(133));
        prop_assert_eq!(to_biguint(&a.shl_vartime(7)), (&a_bi << 7u32) % pow2(133));

        if !b.is_zero() {
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(to_biguint(&q), &a_bi / &b_bi);
            prop_assert_eq!(to_biguint(&r), &a_bi % &b_bi);
        }
    }

    #[test]
    fn resize_to_odd_width(a in uint()) {
        let a_bi = to_biguint(&a);
        prop_assert_eq!(to_biguint(&a.resize::<133, { nlimbs(133) }>()), &a_bi % pow2(133));
        match a.checked_resize::<133, { nlimbs(133) }>() {
            Ok(small) => prop_assert_eq!(to_biguint(&small), a_bi),
            Err(err) => {
                prop_assert_eq!(err, Error::Overflow);
                prop_assert!(a_bi >= pow2(133));
            }
        }
    }

    #[test]
    fn decimal_and_hex_formatting(a in uint()) {
        let a_bi = to_biguint(&a);
        prop_assert_eq!(a.to_string(), a_bi.to_string());
        prop_assert_eq!(format!("{a:x}"), a_bi.to_str_radix(16));
        prop_assert_eq!(U256::from_decimal(&a_bi.to_string()), Ok(a));
    }

    #[test]
    fn modular_ops(a in uint(), b in uint(), p in modulus()) {
        let p_bi = to_biguint(&p);
        let a = a.checked_rem(&p).unwrap();
        let b = b.checked_rem(&p).unwrap();
        let (a_bi, b_bi) = (to_biguint(&a), to_biguint(&b));

        prop_assert_eq!(to_biguint(&a.add_mod(&b, &p)), (&a_bi + &b_bi) % &p_bi);
        prop_assert_eq!(to_biguint(&a.sub_mod(&b, &p)), (&a_bi + &p_bi - &b_bi) % &p_bi);
        prop_assert_eq!(to_biguint(&a.neg_mod(&p)), (&p_bi - &a_bi) % &p_bi);
        prop_assert_eq!(to_biguint(&a.mul_mod(&b, &p).unwrap()), (&a_bi * &b_bi) % &p_bi);
    }

    #[test]
    fn inv_mod(a in uint(), p in modulus()) {
        let a = a.checked_rem(&p).unwrap();
        let a_bi = to_biguint(&a);
        let p_bi = to_biguint(&p);
        let expected = a_bi.invm(&p_bi);

        match (expected, a.inv_mod(&p)) {
            (Some(exp), Ok(act)) => prop_assert_eq!(to_biguint(&act), exp),
            (None, Err(err)) => prop_assert_eq!(err, Error::NotInvertible),
            (exp, act) => panic!("disagreement on modular inverse: {exp:?} vs {act:?}"),
        }

        if p.is_odd() {
            match (a.inv_mod(&p), a.inv_odd_mod(&p)) {
                (Ok(x), Ok(y)) => prop_assert_eq!(x, y),
                (Err(x), Err(y)) => prop_assert_eq!(x, y),
                (x, y) => panic!("inversion routines disagree: {x:?} vs {y:?}"),
            }
        }
    }
}

proptest! {
    #[test]
    fn bitwise(a in uint(), b in uint()) {
        let (a_bi, b_bi) = (to_biguint(&a), to_biguint(&b));
        let mask = pow2(256) - 1u8;

        prop_assert_eq!(to_biguint(&(a & b)), &a_bi & &b_bi);
        prop_assert_eq!(to_biguint(&(a | &b)), &a_bi | &b_bi);
        prop_assert_eq!(to_biguint(&(&a ^ b)), &a_bi ^ &b_bi);
        prop_assert_eq!(to_biguint(&(&a & &b)), &a_bi & &b_bi);
        prop_assert_eq!(to_biguint(&!a), &a_bi ^ &mask);

        let mut c = a;
        c ^= b;
        c |= &b;
        c &= a;
        prop_assert_eq!(to_biguint(&c), ((&a_bi ^ &b_bi) | &b_bi) & &a_bi);
    }

    #[test]
    fn bitwise_odd_width(a in uint133(), b in uint133()) {
        let (a_bi, b_bi) = (to_biguint(&a), to_biguint(&b));
        let mask = pow2(133) - 1u8;

        prop_assert_eq!(to_biguint(&(a & b)), &a_bi & &b_bi);
        prop_assert_eq!(to_biguint(&(a | b)), &a_bi | &b_bi);
        prop_assert_eq!(to_biguint(&(a ^ &b)), &a_bi ^ &b_bi);
        prop_assert_eq!(to_biguint(&!&a), &a_bi ^ &mask);
        prop_assert!((!a).bits() <= 133);
        prop_assert_eq!(!!a, a);
    }
}

#[test]
fn odd_width_edges() {
    let max = U133::MAX;
    assert_eq!(to_biguint(&max), pow2(133) - 1u8);
    assert_eq!(max.wrapping_add(&U133::ONE), U133::ZERO);
    assert_eq!(max.checked_add(&U133::ONE), Err(Error::Overflow));
    assert_eq!(U133::ZERO.wrapping_sub(&U133::ONE), max);
    assert_eq!(max.bits(), 133);
    assert_eq!(U133::ONE.shl_vartime(132).leading_zeros(), 0);
}

#[test]
fn conversions_through_num_bigint() {
    let x: BigUint = "123456789012345678901234567890".parse().unwrap();
    let y: U256 = to_uint(&x);
    assert_eq!(y.to_string(), "123456789012345678901234567890");
    assert_eq!(U64::try_from(u128::MAX), Err(Error::Overflow));
}
