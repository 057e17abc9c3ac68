//! # Cipher Module
//!
//! Encrypts single bits under a [`PublicKey`] and recovers them with the matching
//! [`PrivateKey`].
//!
//! A ciphertext is `c = pk * q + 2 * r + m` with fresh `q < 2^key_bits` and `r < 2^noise_bits`.
//! Reducing `c` modulo the private key `p` leaves `2 * r0 * q + 2 * r + m`, whose parity is `m`
//! as long as that noise stays below `p`.

use crate::errors::DghvError;
use crate::keypair::helper::sample_below_pow2;
use crate::keypair::keys::{PrivateKey, PublicKey};
use crate::keypair::shared_params::Parameters;
use crate::ring::Ring;

use num_bigint::BigInt;
use num_integer::Integer;

use rand::TryCryptoRng;
use rand::rngs::OsRng;

/// One encrypted bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    c: BigInt,
}

impl Ciphertext {
    pub fn from_integer(c: BigInt) -> Self {
        Self { c }
    }

    pub fn value(&self) -> &BigInt {
        &self.c
    }

    pub fn bits(&self) -> u64 {
        self.c.bits()
    }
}

/// Encrypts with fresh randomness on every call and decrypts without any.
///
/// Owns its random source; use one cipher per thread.
pub struct Cipher<R = OsRng> {
    rng: R,
}

impl Cipher<OsRng> {
    /// Cipher backed by the operating system's secure random source.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for Cipher<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TryCryptoRng> Cipher<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Encrypts `bit` as `public_key * q + 2 * r + bit`.
    ///
    /// # Errors
    /// * `DghvError::InvalidPlaintext` if `bit` is neither 0 nor 1.
    /// * `DghvError::RandomSource` if the random source failed.
    pub fn encrypt(
        &mut self,
        bit: u8,
        public_key: &PublicKey,
        params: &Parameters,
    ) -> Result<Ciphertext, DghvError> {
        if bit > 1 {
            return Err(DghvError::InvalidPlaintext(bit));
        }

        let q = sample_below_pow2(&mut self.rng, params.key_bits())?;
        let r = sample_below_pow2(&mut self.rng, params.noise_bits())?;

        let c: BigInt = public_key.value() * q + 2 * r + BigInt::from(bit);

        log::trace!("encrypted one bit into a {}-bit ciphertext", c.bits());

        Ok(Ciphertext { c })
    }

    /// Encrypts every bit of `bits` independently.
    ///
    /// Fails on the first value that is not a bit; nothing is returned in that case.
    pub fn encrypt_bits(
        &mut self,
        bits: &[u8],
        public_key: &PublicKey,
        params: &Parameters,
    ) -> Result<Vec<Ciphertext>, DghvError> {
        if let Some(&bad) = bits.iter().find(|&&bit| bit > 1) {
            return Err(DghvError::InvalidPlaintext(bad));
        }

        bits.iter()
            .map(|&bit| self.encrypt(bit, public_key, params))
            .collect()
    }
}

impl Cipher {
    /// Recovers the bit as `(ciphertext mod p) mod 2`, using floor reduction.
    ///
    /// Correct whenever the accumulated noise `2 * r0 * q + 2 * r + m` stays below `p`. Keys and
    /// ciphertexts produced by this crate always satisfy that; arbitrary integers may not.
    ///
    /// # Errors
    /// `DghvError::InvalidKey` if `private_key` is not a positive odd integer.
    pub fn decrypt(ciphertext: &Ciphertext, private_key: &PrivateKey) -> Result<u8, DghvError> {
        if !private_key.is_valid() {
            return Err(DghvError::InvalidKey(format!(
                "Private key must be a positive odd integer, got a {}-bit {} value",
                private_key.bits(),
                if private_key.value().is_even() {
                    "even"
                } else {
                    "negative"
                }
            )));
        }

        // A key of 1 passes and reduces every ciphertext to 0.
        let ring = Ring::try_with(private_key.value().clone())
            .map_err(|e| DghvError::InvalidKey(e.to_string()))?;

        let noise = ring.normalize(ciphertext.value());
        Ok(if noise.is_odd() { 1 } else { 0 })
    }

    pub fn decrypt_bits(
        ciphertexts: &[Ciphertext],
        private_key: &PrivateKey,
    ) -> Result<Vec<u8>, DghvError> {
        ciphertexts
            .iter()
            .map(|ciphertext| Self::decrypt(ciphertext, private_key))
            .collect()
    }
}
