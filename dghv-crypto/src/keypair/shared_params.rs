use crate::errors::DghvError;
use crate::preset::Preset;

use num_bigint::BigInt;
use num_traits::One;

use serde::{Deserialize, Serialize};

/// Extra private-key bits used by [`Parameters::new`].
pub const DEFAULT_SECURITY_MARGIN: u64 = 16;

/// Smallest margin that keeps every honest ciphertext's noise below half the private key.
///
/// The noise `2*r0*q + 2*r + m` is below `2^(noise_bits + key_bits + 2)`, while a private key
/// of `noise_bits + key_bits + 4` bits is at least `2^(noise_bits + key_bits + 3)`.
pub const MIN_SECURITY_MARGIN: u64 = 4;

/// Largest accepted private-key bit length, `noise_bits + key_bits + security_margin`.
///
/// Bounds every allocation made while sampling or multiplying key material.
pub const MAX_PRIVATE_KEY_BITS: u64 = 1 << 20;

/// Size parameters shared by key generation, encryption and decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct Parameters {
    /// Bit length of the noise bound, `max_noise = 2^noise_bits`.
    noise_bits: u64,
    /// Bit length of the multiplier bound, `max_multiplier = 2^key_bits`.
    key_bits: u64,
    /// Private-key bits on top of `noise_bits + key_bits`.
    security_margin: u64,
}

/// Unvalidated mirror of [`Parameters`] as it appears in a configuration document.
#[derive(Deserialize)]
struct RawParameters {
    noise_bits: u64,
    key_bits: u64,
    #[serde(default = "default_security_margin")]
    security_margin: u64,
}

fn default_security_margin() -> u64 {
    DEFAULT_SECURITY_MARGIN
}

impl TryFrom<RawParameters> for Parameters {
    type Error = DghvError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        Parameters::with_security_margin(raw.noise_bits, raw.key_bits, raw.security_margin)
    }
}

impl Parameters {
    /// Creates parameters with [`DEFAULT_SECURITY_MARGIN`].
    ///
    /// # Errors
    /// `DghvError::InvalidParameters` when `noise_bits == 0`, `key_bits == 0`,
    /// `noise_bits >= key_bits` or the private key would exceed [`MAX_PRIVATE_KEY_BITS`].
    ///
    /// # Example
    ///
    /// ```
    /// # use dghv_crypto::keypair::shared_params::Parameters;
    /// let params = Parameters::new(4, 8).unwrap();
    /// assert_eq!(params.private_key_bits(), 4 + 8 + 16);
    /// assert!(Parameters::new(8, 8).is_err());
    /// ```
    pub fn new(noise_bits: u64, key_bits: u64) -> Result<Self, DghvError> {
        Self::with_security_margin(noise_bits, key_bits, DEFAULT_SECURITY_MARGIN)
    }

    /// Creates parameters with an explicit private-key security margin.
    pub fn with_security_margin(
        noise_bits: u64,
        key_bits: u64,
        security_margin: u64,
    ) -> Result<Self, DghvError> {
        if noise_bits == 0 || key_bits == 0 {
            return Err(DghvError::InvalidParameters(format!(
                "Bit lengths must be > 0, got noise_bits={} key_bits={}",
                noise_bits, key_bits
            )));
        }

        if noise_bits >= key_bits {
            return Err(DghvError::InvalidParameters(format!(
                "noise_bits ({}) must be smaller than key_bits ({})",
                noise_bits, key_bits
            )));
        }

        if security_margin < MIN_SECURITY_MARGIN {
            return Err(DghvError::InvalidParameters(format!(
                "Security margin must be >= {}, got {}",
                MIN_SECURITY_MARGIN, security_margin
            )));
        }

        let private_key_bits = noise_bits
            .checked_add(key_bits)
            .and_then(|sum| sum.checked_add(security_margin))
            .filter(|&bits| bits <= MAX_PRIVATE_KEY_BITS)
            .ok_or_else(|| {
                DghvError::InvalidParameters(format!(
                    "Private key bit length must be <= {} (noise_bits={} key_bits={} margin={})",
                    MAX_PRIVATE_KEY_BITS, noise_bits, key_bits, security_margin
                ))
            })?;
        log::trace!("parameters accepted: {}-bit private key", private_key_bits);

        Ok(Self {
            noise_bits,
            key_bits,
            security_margin,
        })
    }

    pub fn from_preset(preset: Preset) -> Result<Self, DghvError> {
        Self::new(preset.noise_bits, preset.key_bits)
    }

    /// Loads parameters from a JSON configuration document.
    ///
    /// `security_margin` may be omitted and falls back to [`DEFAULT_SECURITY_MARGIN`].
    pub fn from_json(config: &str) -> Result<Self, DghvError> {
        Ok(serde_json::from_str(config)?)
    }

    pub fn to_json(&self) -> Result<String, DghvError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn noise_bits(&self) -> u64 {
        self.noise_bits
    }

    pub fn key_bits(&self) -> u64 {
        self.key_bits
    }

    pub fn security_margin(&self) -> u64 {
        self.security_margin
    }

    /// `2^noise_bits`, the exclusive bound of every noise draw.
    pub fn max_noise(&self) -> BigInt {
        BigInt::one() << self.noise_bits
    }

    /// `2^key_bits`, the exclusive bound of every multiplier draw.
    pub fn max_multiplier(&self) -> BigInt {
        BigInt::one() << self.key_bits
    }

    /// Exact bit length of a generated private key.
    pub fn private_key_bits(&self) -> u64 {
        self.key_bits + self.noise_bits + self.security_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[test]
    fn test_rejects_invalid_sizes() {
        assert!(matches!(
            Parameters::new(0, 8),
            Err(DghvError::InvalidParameters(_))
        ));
        assert!(matches!(
            Parameters::new(4, 0),
            Err(DghvError::InvalidParameters(_))
        ));
        assert!(matches!(
            Parameters::new(8, 8),
            Err(DghvError::InvalidParameters(_))
        ));
        assert!(matches!(
            Parameters::new(9, 8),
            Err(DghvError::InvalidParameters(_))
        ));
        assert!(matches!(
            Parameters::with_security_margin(4, 8, MIN_SECURITY_MARGIN - 1),
            Err(DghvError::InvalidParameters(_))
        ));
        assert!(matches!(
            Parameters::with_security_margin(4, u64::MAX, 16),
            Err(DghvError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_bit_lengths() -> Result<(), DghvError> {
        for (noise_bits, key_bits, margin) in [
            (1, 1 << 40, DEFAULT_SECURITY_MARGIN),
            (4, MAX_PRIVATE_KEY_BITS, DEFAULT_SECURITY_MARGIN),
            (4, 8, MAX_PRIVATE_KEY_BITS),
            (4, 8, u64::MAX),
        ] {
            assert!(matches!(
                Parameters::with_security_margin(noise_bits, key_bits, margin),
                Err(DghvError::InvalidParameters(_))
            ));
        }

        let largest = Parameters::with_security_margin(
            4,
            MAX_PRIVATE_KEY_BITS - 4 - MIN_SECURITY_MARGIN,
            MIN_SECURITY_MARGIN,
        )?;
        assert_eq!(largest.private_key_bits(), MAX_PRIVATE_KEY_BITS);

        assert!(Parameters::from_json(r#"{"noise_bits": 1, "key_bits": 1099511627776}"#).is_err());
        Ok(())
    }

    #[test]
    fn test_derived_bounds() -> Result<(), DghvError> {
        let params = Parameters::new(4, 8)?;
        assert_eq!(params.max_noise(), BigInt::from(16));
        assert_eq!(params.max_multiplier(), BigInt::from(256));
        assert_eq!(params.private_key_bits(), 28);

        let params = Parameters::with_security_margin(8, 64, 8)?;
        assert_eq!(params.private_key_bits(), 80);
        assert_eq!(params.max_multiplier(), BigInt::one() << 64u32);
        Ok(())
    }

    #[test]
    fn test_json_config() -> Result<(), DghvError> {
        let params = Parameters::from_json(r#"{"noise_bits": 8, "key_bits": 64}"#)?;
        assert_eq!(params, Parameters::new(8, 64)?);

        let params =
            Parameters::from_json(r#"{"noise_bits": 8, "key_bits": 64, "security_margin": 32}"#)?;
        assert_eq!(params.security_margin(), 32);
        assert_eq!(Parameters::from_json(&params.to_json()?)?, params);
        Ok(())
    }

    #[test]
    fn test_json_config_is_validated() {
        let err = Parameters::from_json(r#"{"noise_bits": 64, "key_bits": 8}"#).unwrap_err();
        assert!(err.to_string().contains("noise_bits (64) must be smaller"));

        assert!(matches!(
            Parameters::from_json(r#"{"noise_bits": 8}"#),
            Err(DghvError::Serialization(_))
        ));
    }

    #[quickcheck]
    fn prop_accepts_exactly_ordered_sizes(noise_bits: u16, key_bits: u16) -> bool {
        let accepted = Parameters::new(noise_bits as u64, key_bits as u64).is_ok();
        accepted == (noise_bits > 0 && noise_bits < key_bits)
    }
}
