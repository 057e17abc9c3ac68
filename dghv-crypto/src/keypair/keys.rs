use crate::errors::DghvError;
use crate::keypair::helper::{sample_below_pow2, sample_odd_below_pow2, sample_odd_with_bit_length};
use crate::keypair::shared_params::Parameters;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Signed;

use rand::TryCryptoRng;
use rand::rngs::OsRng;

use std::fmt;

/// The secret odd modulus `p`.
///
/// Holds any integer so that externally supplied keys can be checked where they are used;
/// [`KeyGenerator::private_key`] only ever produces odd keys of
/// [`Parameters::private_key_bits`] bits.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    p: BigInt,
}

/// `pk = p * q0 + 2 * r0`, safe to share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pk: BigInt,
}

impl PrivateKey {
    pub fn from_integer(p: BigInt) -> Self {
        Self { p }
    }

    pub fn value(&self) -> &BigInt {
        &self.p
    }

    pub fn bits(&self) -> u64 {
        self.p.bits()
    }

    /// Whether the key is a positive odd integer, the only shape usable for reduction.
    pub fn is_valid(&self) -> bool {
        self.p.is_positive() && self.p.is_odd()
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("bits", &self.p.bits())
            .finish_non_exhaustive()
    }
}

impl PublicKey {
    pub fn from_integer(pk: BigInt) -> Self {
        Self { pk }
    }

    pub fn value(&self) -> &BigInt {
        &self.pk
    }

    pub fn bits(&self) -> u64 {
        self.pk.bits()
    }
}

/// Produces private keys and the public keys derived from them.
///
/// Owns its random source; use one generator per thread.
pub struct KeyGenerator<R = OsRng> {
    rng: R,
}

impl KeyGenerator<OsRng> {
    /// Generator backed by the operating system's secure random source.
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for KeyGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TryCryptoRng> KeyGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Draws an odd private key of exactly `params.private_key_bits()` bits.
    ///
    /// The top bit and the low bit are forced, so no candidate is ever rejected.
    pub fn private_key(&mut self, params: &Parameters) -> Result<PrivateKey, DghvError> {
        let bits = params.private_key_bits();
        let p = sample_odd_with_bit_length(&mut self.rng, bits)?;

        log::debug!(
            "generated private key: {} bits (noise_bits={}, key_bits={}, margin={})",
            bits,
            params.noise_bits(),
            params.key_bits(),
            params.security_margin()
        );

        Ok(PrivateKey { p })
    }

    /// Computes `pk = p * q0 + 2 * r0` for fresh `q0 < 2^key_bits` and `r0 < 2^noise_bits`.
    ///
    /// `q0` is drawn odd, which keeps `pk` odd. An even `pk` would make
    /// `c mod 2` equal the plaintext bit for every ciphertext under that key.
    ///
    /// # Errors
    /// `DghvError::InvalidParameters` if `private_key` is not a positive odd integer.
    pub fn public_key(
        &mut self,
        private_key: &PrivateKey,
        params: &Parameters,
    ) -> Result<PublicKey, DghvError> {
        if !private_key.is_valid() {
            return Err(DghvError::InvalidParameters(
                "Private key must be a positive odd integer".to_string(),
            ));
        }

        let q0 = sample_odd_below_pow2(&mut self.rng, params.key_bits())?;
        let r0 = sample_below_pow2(&mut self.rng, params.noise_bits())?;

        let pk: BigInt = &private_key.p * q0 + 2 * r0;

        log::debug!("generated public key: {} bits", pk.bits());

        Ok(PublicKey { pk })
    }

    /// Generates a private key and the public key derived from it.
    pub fn key_pair(&mut self, params: &Parameters) -> Result<(PrivateKey, PublicKey), DghvError> {
        let private_key = self.private_key(params)?;
        let public_key = self.public_key(&private_key, params)?;
        Ok((private_key, public_key))
    }
}
