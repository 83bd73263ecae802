//! Random number generator support

use crate::{BigUint, Error, Limb, Random, RandomMod, Result, Word};
use rand_core::RngCore;

impl<const BITS: u32, const LIMBS: usize> BigUint<BITS, LIMBS> {
    /// Fill the limbs below bit `bit_length` with random bits.
    fn random_bits<R: RngCore + ?Sized>(rng: &mut R, bit_length: u32) -> Self {
        let mut limbs = [Limb::ZERO; LIMBS];
        let nlimbs = bit_length.div_ceil(Limb::BITS) as usize;

        for limb in &mut limbs[..nlimbs] {
            let mut bytes = [0u8; Limb::BYTES];
            rng.fill_bytes(&mut bytes);
            *limb = Limb(Word::from_le_bytes(bytes));
        }

        let partial = bit_length % Limb::BITS;
        if partial != 0 {
            limbs[nlimbs - 1].0 &= Word::MAX >> (Limb::BITS - partial);
        }

        Self { limbs }
    }
}

impl<const BITS: u32, const LIMBS: usize> Random for BigUint<BITS, LIMBS> {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::random_bits(rng, BITS)
    }
}

impl<const BITS: u32, const LIMBS: usize> RandomMod for BigUint<BITS, LIMBS> {
    fn random_mod<R: RngCore + ?Sized>(rng: &mut R, modulus: &Self) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::DivByZero);
        }

        // Sample only the bits of the modulus so each attempt succeeds with probability > 1/2.
        let bits = modulus.bits();
        loop {
            let candidate = Self::random_bits(rng, bits);
            if candidate < *modulus {
                return Ok(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{BigUint, Error, Random, RandomMod, U256, nlimbs};
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    type U60 = BigUint<60, { nlimbs(60) }>;

    #[test]
    fn random_respects_width() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..64 {
            assert!(U60::random(&mut rng).bits() <= 60);
        }
    }

    #[test]
    fn random_mod_is_below_modulus() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let modulus = U256::from_hex_literal(
            "0x10000000000000000000000000000000000000000000000000000000000000a",
        );
        for _ in 0..64 {
            let x = U256::random_mod(&mut rng, &modulus).unwrap();
            assert!(x < modulus);
        }
        assert_eq!(U256::random_mod(&mut rng, &U256::ONE), Ok(U256::ZERO));
        assert_eq!(
            U256::random_mod(&mut rng, &U256::ZERO),
            Err(Error::DivByZero)
        );
    }
}
