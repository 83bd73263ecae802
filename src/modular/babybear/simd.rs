//! Eight-lane batch arithmetic over BabyBear and its quartic extension `F_p[X] / (X^4 - 11)`.
//!
//! With `target_feature = "avx2"` on `x86_64` the lanes go through 256-bit vectors; otherwise
//! each lane runs through [`BabyBearOps`]. Both paths return canonical Montgomery residues, so
//! their outputs are identical.

use super::BabyBearOps;
use crate::modular::BabyBear;

/// Montgomery form of the extension non-residue `W = 11`.
const W_MONTY: u32 = 0x37FF_FFE9;

type Lanes = [u32; 8];

/// Lane-wise product of eight BabyBear elements.
pub fn babybear_mul8(a: &[BabyBear; 8], b: &[BabyBear; 8]) -> [BabyBear; 8] {
    from_raw_lanes(lanes::mul(&raw_lanes(a), &raw_lanes(b)))
}

/// Lane-wise sum of eight BabyBear elements.
pub fn babybear_add8(a: &[BabyBear; 8], b: &[BabyBear; 8]) -> [BabyBear; 8] {
    from_raw_lanes(lanes::add(&raw_lanes(a), &raw_lanes(b)))
}

/// Eight extension products at once.
///
/// Each input holds eight extension elements coefficient-major: `a[i][lane]` is the coefficient
/// of `X^i` in element `lane`.
pub fn babybear_fp4_vec_mul(a: &[[BabyBear; 8]; 4], b: &[[BabyBear; 8]; 4]) -> [[BabyBear; 8]; 4] {
    let a = a.each_ref().map(raw_lanes);
    let b = b.each_ref().map(raw_lanes);
    let w = [W_MONTY; 8];

    let dot = |terms: &[(usize, usize)]| {
        terms
            .iter()
            .map(|&(i, j)| lanes::mul(&a[i], &b[j]))
            .reduce(|acc, t| lanes::add(&acc, &t))
            .unwrap_or([0; 8])
    };

    // X^4 = 11, so products landing on X^(4 + k) fold onto X^k times 11.
    let c0 = lanes::add(&dot(&[(0, 0)]), &lanes::mul(&w, &dot(&[(1, 3), (2, 2), (3, 1)])));
    let c1 = lanes::add(&dot(&[(0, 1), (1, 0)]), &lanes::mul(&w, &dot(&[(2, 3), (3, 2)])));
    let c2 = lanes::add(&dot(&[(0, 2), (1, 1), (2, 0)]), &lanes::mul(&w, &dot(&[(3, 3)])));
    let c3 = dot(&[(0, 3), (1, 2), (2, 1), (3, 0)]);

    [c0, c1, c2, c3].map(from_raw_lanes)
}

/// A single extension product `a * b` in `F_p[X] / (X^4 - 11)`.
pub fn fp4_mul(a: &[BabyBear; 4], b: &[BabyBear; 4]) -> [BabyBear; 4] {
    let ops = BabyBearOps;
    let w = BabyBear::from_raw_base(W_MONTY, ops);

    let mut c = [BabyBear::from_raw_base(0, ops); 4];
    for i in 0..4 {
        for j in 0..4 {
            let term = a[i] * b[j];
            if i + j < 4 {
                c[i + j] += term;
            } else {
                c[i + j - 4] += term * w;
            }
        }
    }
    c
}

fn raw_lanes(x: &[BabyBear; 8]) -> Lanes {
    x.map(|e| *e.raw_base())
}

fn from_raw_lanes(x: Lanes) -> [BabyBear; 8] {
    x.map(|raw| BabyBear::from_raw_base(raw, BabyBearOps))
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
#[allow(unsafe_code, unused_unsafe)]
mod lanes {
    use super::Lanes;
    use crate::modular::babybear::{BABYBEAR_MODULUS, MU};
    use core::arch::x86_64::{
        __m256i, _mm256_add_epi32, _mm256_blend_epi32, _mm256_loadu_si256, _mm256_min_epu32,
        _mm256_mul_epu32, _mm256_set1_epi32, _mm256_srli_epi64, _mm256_storeu_si256,
        _mm256_sub_epi32, _mm256_sub_epi64,
    };

    #[inline(always)]
    fn load(x: &Lanes) -> __m256i {
        // SAFETY: `Lanes` is 32 bytes and `loadu` has no alignment requirement.
        unsafe { _mm256_loadu_si256(x.as_ptr().cast()) }
    }

    #[inline(always)]
    fn store(v: __m256i) -> Lanes {
        let mut out = [0u32; 8];
        // SAFETY: `out` is 32 writable bytes and `storeu` has no alignment requirement.
        unsafe { _mm256_storeu_si256(out.as_mut_ptr().cast(), v) };
        out
    }

    /// Montgomery product of canonical lanes.
    pub(super) fn mul(a: &Lanes, b: &Lanes) -> Lanes {
        // SAFETY: AVX2 is enabled at compile time for this module.
        unsafe {
            let a = load(a);
            let b = load(b);
            let p = _mm256_set1_epi32(BABYBEAR_MODULUS as i32);
            let mu = _mm256_set1_epi32(MU as i32);

            // `mul_epu32` reads the even 32-bit lanes; shift the odd ones down to reach them.
            let a_odd = _mm256_srli_epi64::<32>(a);
            let b_odd = _mm256_srli_epi64::<32>(b);
            let prod_evn = _mm256_mul_epu32(a, b);
            let prod_odd = _mm256_mul_epu32(a_odd, b_odd);

            let q_evn = _mm256_mul_epu32(prod_evn, mu);
            let q_odd = _mm256_mul_epu32(prod_odd, mu);
            let qp_evn = _mm256_mul_epu32(q_evn, p);
            let qp_odd = _mm256_mul_epu32(q_odd, p);

            // The signed results in (-p, p) sit in the high half of each 64-bit lane.
            let d_evn = _mm256_sub_epi64(prod_evn, qp_evn);
            let d_odd = _mm256_sub_epi64(prod_odd, qp_odd);
            let t = _mm256_blend_epi32::<0b1010_1010>(_mm256_srli_epi64::<32>(d_evn), d_odd);

            // Negative lanes are huge as unsigned, so the minimum picks `t + p` exactly for them.
            let u = _mm256_add_epi32(t, p);
            store(_mm256_min_epu32(t, u))
        }
    }

    /// Sum of canonical lanes.
    pub(super) fn add(a: &Lanes, b: &Lanes) -> Lanes {
        // SAFETY: AVX2 is enabled at compile time for this module.
        unsafe {
            let p = _mm256_set1_epi32(BABYBEAR_MODULUS as i32);
            let sum = _mm256_add_epi32(load(a), load(b));
            let reduced = _mm256_sub_epi32(sum, p);
            store(_mm256_min_epu32(sum, reduced))
        }
    }
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
mod lanes {
    use super::{BabyBearOps, Lanes};
    use crate::modular::ModularOps;

    pub(super) fn mul(a: &Lanes, b: &Lanes) -> Lanes {
        core::array::from_fn(|i| BabyBearOps.mul(&a[i], &b[i]))
    }

    pub(super) fn add(a: &Lanes, b: &Lanes) -> Lanes {
        core::array::from_fn(|i| BabyBearOps.add(&a[i], &b[i]))
    }
}

#[cfg(test)]
mod tests {
    //! A default build checks the scalar lanes only. Run with
    //! `RUSTFLAGS="-C target-feature=+avx2" cargo test` on `x86_64` to check the AVX2 lanes
    //! against the same per-element results.

    use super::{babybear_add8, babybear_fp4_vec_mul, babybear_mul8, fp4_mul};
    use crate::modular::{BabyBear, BabyBearOps, ModularOps};

    fn sample(seed: u64) -> [BabyBear; 8] {
        core::array::from_fn(|i| {
            let x = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(i as u64 * 0x1_0000_0001);
            BabyBear::from_u64(x >> 7, BabyBearOps)
        })
    }

    fn edge_sample() -> [BabyBear; 8] {
        [0, 1, 2, 11, 0x7800_0000, 0x7800_0000 - 1, 0x3C00_0000, 0x1234_5678]
            .map(|x| BabyBear::from_u64(x, BabyBearOps))
    }

    #[test]
    fn mul8_matches_scalar() {
        for (a, b) in [(sample(1), sample(2)), (edge_sample(), edge_sample()), (edge_sample(), sample(3))] {
            let got = babybear_mul8(&a, &b);
            for i in 0..8 {
                assert_eq!(got[i], a[i] * b[i], "lane {i}");
            }
        }
    }

    #[test]
    fn add8_matches_scalar() {
        for (a, b) in [(sample(4), sample(5)), (edge_sample(), edge_sample())] {
            let got = babybear_add8(&a, &b);
            for i in 0..8 {
                assert_eq!(got[i], a[i] + b[i], "lane {i}");
            }
        }
    }

    #[test]
    fn fp4_vec_mul_matches_scalar() {
        let a = [sample(6), sample(7), edge_sample(), sample(8)];
        let b = [edge_sample(), sample(9), sample(10), sample(11)];
        let got = babybear_fp4_vec_mul(&a, &b);

        for lane in 0..8 {
            let x = [a[0][lane], a[1][lane], a[2][lane], a[3][lane]];
            let y = [b[0][lane], b[1][lane], b[2][lane], b[3][lane]];
            let expected = fp4_mul(&x, &y);
            for k in 0..4 {
                assert_eq!(got[k][lane], expected[k], "lane {lane}, coefficient {k}");
            }
        }
    }

    #[test]
    fn fp4_x_to_the_fourth_is_eleven() {
        let ops = BabyBearOps;
        let zero = BabyBear::from_u64(0, ops);
        let one = BabyBear::from_u64(1, ops);
        let x = [zero, one, zero, zero];
        let x2 = fp4_mul(&x, &x);
        let x4 = fp4_mul(&x2, &x2);
        assert_eq!(x4, [BabyBear::from_u64(11, ops), zero, zero, zero]);
        assert_eq!(ops.from_montgomery(x4[0].raw_base()), 11);
    }
}
